//! # fixins demo application
//!
//! A small fruit-stand CLI that shows how a command picks up fixins. This is
//! **not** a real app; it exists to demonstrate and manually verify the
//! library's behavior.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example fixins_demo -- --apple 3 -v
//! cargo run --example fixins_demo -- --print-config
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature                 | How to exercise it                                                       |
//! |-------------------------|--------------------------------------------------------------------------|
//! | Declared defaults       | `cargo run --example fixins_demo -- -v`                                  |
//! | Config file             | Save the `--print-config` output to the path in its header, edit, rerun   |
//! | Explicit config file    | `cargo run --example fixins_demo -- -C ./fruit-stand.toml -v`             |
//! | Command line wins       | `cargo run --example fixins_demo -- -a 1 -v` with `apple = 5` in the file |
//! | Sample config           | `cargo run --example fixins_demo -- -a 7 --print-config`                  |
//! | Version                 | `cargo run --example fixins_demo -- --version`                            |
//! | Sorted help             | `cargo run --example fixins_demo -- --help`                               |
//! | Dry run                 | `cargo run --example fixins_demo -- -D`                                   |
//! | Verbosity and tracing   | `cargo run --example fixins_demo -- -vvv`                                 |

use serde::Deserialize;

use fixins::{Fixins, FixinsError, OptionSpec, Scalar};

/// The command body's view of its options.
#[derive(Debug, Deserialize)]
struct Stand {
    apple: i64,
    banana: i64,
    #[serde(default)]
    customer: Vec<String>,
    price: f64,
}

fn definition() -> Result<Fixins, FixinsError> {
    Fixins::builder()
        .name("fruit-stand")
        .about("Sells fruit, configurably.")
        .version(env!("CARGO_PKG_VERSION"))
        .version_text("A demo of the fixins crate.")
        .option(
            OptionSpec::integer("apple", &["-a", "--apple"])
                .default_value(1)
                .help("How many apples."),
        )
        .option(
            OptionSpec::integer("banana", &["-B", "--banana"])
                .default_value(2)
                .help("How many bananas."),
        )
        .option(
            OptionSpec::multi("customer", &["-c", "--customer"], Scalar::String)
                .help("Serve this customer; repeat for more."),
        )
        .option(
            OptionSpec::float("price", &["-p", "--price"])
                .default_value(0.5)
                .help("Price per fruit."),
        )
        .dry_run_option()
        .verbose_option()
        .tracing(true)
        .build()
}

fn main() {
    let fixins = match definition() {
        Ok(fixins) => fixins,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    };

    let invocation = fixins.run();
    let mut echo = invocation.echo();

    let stand: Stand = match invocation.deserialize() {
        Ok(stand) => stand,
        Err(e) => {
            let _ = echo.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    };
    tracing::debug!(?stand, "resolved options");

    if let Some(path) = invocation.config_path() {
        let _ = echo.detail(&format!("Read settings from {}", path.display()));
    }
    if stand.customer.is_empty() {
        let _ = echo.warn("No customers today.");
    }

    let total = (stand.apple + stand.banana) as f64 * stand.price;
    for customer in &stand.customer {
        let action = if invocation.is_dry_run() { "Would sell" } else { "Sold" };
        let _ = echo.info(&format!(
            "{action} {} apples and {} bananas to {customer} for {total:.2}",
            stand.apple, stand.banana
        ));
    }
    let _ = echo.debug(&format!("{stand:?}"));
}
