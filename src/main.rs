use std::process::ExitCode;

fn main() -> ExitCode {
    uaprobe::run()
}
