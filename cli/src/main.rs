//! squares - deterministic Super Bowl squares grid generator
//!
//! Collects the inputs (names, seed, optional team labels), hands them to
//! the engine, and prints the resulting 10x10 grid. All validation happens
//! here, before the engine runs; the engine itself never fails on a valid
//! request.

use std::{env, process::exit};

use squares_grid_core_rs::{generate, link, render, GridRequest, Roster};

struct Opts {
    /// Comma/newline separated raw name list (ignored with --link).
    names: Option<String>,

    /// RNG seed (ignored with --link).
    seed: Option<String>,

    /// Column-axis team label.
    col_team: Option<String>,

    /// Row-axis team label.
    row_team: Option<String>,

    /// Decode a previously shared link instead of names/seed.
    link: Option<String>,

    /// Also print the shareable query string.
    share: bool,

    /// Print the board as JSON instead of a table.
    json: bool,

    /// Also print the board fingerprint.
    fingerprint: bool,
}

const USAGE: &str = "usage: squares --names <a,b,c> --seed <n> [options]
       squares --link <query-or-url> [options]

options:
  --names <list>       comma or newline separated names (1-100)
  --seed <n>           32-bit integer seed
  --col-team <label>   label for the column axis
  --row-team <label>   label for the row axis
  --link <query>       regenerate a grid from a shared link
  --share              print the shareable query string
  --json               print the board as JSON
  --fingerprint        print the board layout fingerprint";

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("{}", USAGE);
        exit(1);
    }
    let opts = parse_opts(&args);

    let request = match build_request(&opts) {
        Ok(request) => request,
        Err(message) => {
            eprintln!("error: {}", message);
            exit(1);
        }
    };

    let board = match generate(&request) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("error: {}", err);
            exit(1);
        }
    };

    if opts.json {
        match serde_json::to_string_pretty(&board) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("error: failed to serialize board: {}", err);
                exit(1);
            }
        }
    } else {
        print!("{}", render::render_text(&board));
    }

    if opts.share {
        println!("share: {}", link::encode(&request));
    }
    if opts.fingerprint {
        println!("fingerprint: {}", board.fingerprint());
    }
}

fn parse_opts(args: &[String]) -> Opts {
    let mut opts = Opts {
        names: None,
        seed: None,
        col_team: None,
        row_team: None,
        link: None,
        share: false,
        json: false,
        fingerprint: false,
    };

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "--share" => {
                opts.share = true;
                i += 1;
            }
            "--json" => {
                opts.json = true;
                i += 1;
            }
            "--fingerprint" => {
                opts.fingerprint = true;
                i += 1;
            }
            flag @ ("--names" | "--seed" | "--col-team" | "--row-team" | "--link") => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("error: {} requires a value", flag);
                    exit(1);
                };
                let value = value.clone();
                match flag {
                    "--names" => opts.names = Some(value),
                    "--seed" => opts.seed = Some(value),
                    "--col-team" => opts.col_team = Some(value),
                    "--row-team" => opts.row_team = Some(value),
                    "--link" => opts.link = Some(value),
                    _ => unreachable!(),
                }
                i += 2;
            }
            other => {
                eprintln!("error: unknown option '{}'\n{}", other, USAGE);
                exit(1);
            }
        }
    }
    opts
}

/// Assemble a validated request from the parsed options
///
/// With --link, the link supplies names/seed/labels and any --col-team or
/// --row-team flag overrides the decoded label.
fn build_request(opts: &Opts) -> Result<GridRequest, String> {
    let mut request = match &opts.link {
        Some(raw) => link::decode(raw).map_err(|e| e.to_string())?,
        None => {
            let names_raw = opts
                .names
                .as_deref()
                .ok_or("--names is required (or use --link)")?;
            let roster = Roster::parse(names_raw).map_err(|e| e.to_string())?;

            let seed_raw = opts
                .seed
                .as_deref()
                .ok_or("--seed is required (or use --link)")?;
            let seed: i32 = seed_raw
                .parse()
                .map_err(|_| format!("seed '{}' is not a 32-bit integer", seed_raw))?;

            GridRequest {
                names: roster.names().to_vec(),
                seed,
                col_label: None,
                row_label: None,
            }
        }
    };

    if let Some(col) = &opts.col_team {
        request.col_label = Some(col.clone());
    }
    if let Some(row) = &opts.row_team {
        request.row_label = Some(row.clone());
    }

    Ok(request)
}
