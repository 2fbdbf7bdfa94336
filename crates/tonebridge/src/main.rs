#![forbid(unsafe_code)]

fn main() {
    let mode = tonebridge::util::OutputMode::detect();
    if let Err(error) = tonebridge::run_from_env() {
        if mode.should_emit_json() {
            eprintln!(
                "{}",
                serde_json::json!({
                    "status": "error",
                    "error": error.to_string(),
                    "exit_code": error.exit_code(),
                    "output": mode,
                })
            );
        } else {
            eprintln!("{error}");
        }
        std::process::exit(error.exit_code());
    }
}
