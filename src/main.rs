use std::process::exit;

use container_startup::app::App;
use container_startup::config::config_parser;
use container_startup::errors::print_error;
use container_startup::errors::EXIT_CODE_GENERAL_ERROR;
use container_startup::logging;
use container_startup::plugins::PluginRegistry;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match config_parser::load() {
        Ok(config) => config,
        Err(e) => {
            print_error(e.message());
            exit(e.exit_code().unwrap_or(EXIT_CODE_GENERAL_ERROR));
        }
    };

    let log = logging::initialise(args.first().map(String::as_str), &config);
    match config_parser::verbosity_override(log.as_ref()) {
        Ok(Some(level)) => log.set_verbosity(level),
        Ok(None) => {}
        Err(e) => {
            log.error(e.message());
            if !log.uses_stdio() {
                print_error(e.message());
            }
            exit(e.exit_code().unwrap_or(EXIT_CODE_GENERAL_ERROR));
        }
    }

    let processors = match PluginRegistry::builtin().load_processors(&log, &config) {
        Ok(processors) => processors,
        Err(e) => {
            log.error(&format!("Loading command processor plugins failed: {}", e));
            print_error(&e.to_string());
            exit(EXIT_CODE_GENERAL_ERROR);
        }
    };

    let app = App::new(log, processors);
    exit(app.run(&args));
}
