mod cli;
mod logging;
mod prober;
mod report;
mod session;
mod targets;

use clap::Parser;
use cli::Cli;
use report::Verdict;
use session::Session;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        // Help and version text go to stderr too: stdout is reserved for the status line.
        Err(e) => {
            eprint!("{}", e);
            return emit(Verdict::usage());
        }
    };

    logging::init(args.verbose);

    let verdict = match Session::new(&args).run().await {
        Ok(verdict) => verdict,
        Err(e) => {
            tracing::error!("check aborted: {:#}", e);
            Verdict::unknown(format!("{:#}", e))
        }
    };

    emit(verdict)
}

fn emit(verdict: Verdict) -> ExitCode {
    println!("{}", verdict);
    verdict.exit_code()
}
