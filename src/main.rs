use flagtap::{app::QuizApp, game::Runner};

/// Dig an optional `--seed N` / `--seed=N` out of the args. Anything else is politely ignored.
fn seed_arg(args: &mut dyn Iterator<Item = String>) -> Option<u64> {
    while let Some(arg) = args.next() {
        let value = if arg == "--seed" {
            args.next()
        } else {
            arg.strip_prefix("--seed=").map(str::to_owned)
        };
        if let Some(value) = value {
            match value.parse() {
                Ok(seed) => return Some(seed),
                Err(_) => {
                    eprintln!("--seed wants a number, not {:?}", value);
                    std::process::exit(2);
                }
            }
        }
    }
    None
}

fn main() {
    let mut args = std::env::args().skip(1);
    let app = match seed_arg(&mut args) {
        Some(seed) => QuizApp::from_seed(seed),
        None => QuizApp::new(),
    };
    Runner::new(app).run();
}
