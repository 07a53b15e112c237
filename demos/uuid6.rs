//! Simple command that prints one or '-n count' UUIDv6 (or UUIDv4 with '-4') strings

use std::{env, io, io::Write, process::ExitCode};

use uuid6::Case;

#[derive(Debug, Default)]
struct Options {
    count: Option<usize>,
    v4: bool,
    case: Case,
    separators: bool,
}

fn main() -> io::Result<ExitCode> {
    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-n count] [-4] [-u] [-s]",
                    program.as_deref().unwrap_or("uuid6")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count.unwrap_or(1) {
        let uuid = if opts.v4 {
            uuid6::uuid4()
        } else {
            uuid6::uuid6()
        };
        if opts.separators {
            writeln!(buf, "{}", &*uuid.encode(opts.case))?;
        } else {
            writeln!(buf, "{}", &*uuid.encode_simple(opts.case))?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options {
        separators: true,
        ..Default::default()
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-4" => opts.v4 = true,
            "-u" => opts.case = Case::Upper,
            "-s" => opts.separators = false,
            "-n" => {
                if opts.count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                opts.count.replace(c);
            }
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }
    Ok(opts)
}
