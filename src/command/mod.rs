/*  container-startup: command dispatcher for container startup plugins
 *  Copyright (C) 2019 The container-startup developers
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

//! Registration of command handlers and dispatch of invocations to them
//!
//! A plugin creates a [CommandProcessor] and registers its handlers:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use container_startup::command::{CommandProcessor, NamedArgument, NamedArguments, PositionalArgument};
//! use container_startup::logging::StdioLogger;
//!
//! let mut processor = CommandProcessor::new("example", Arc::new(StdioLogger::new()));
//! processor
//!     .add_handler(
//!         |_: &[String], named: &NamedArguments| {
//!             println!("Hello {}", named.value("name").unwrap_or("world"));
//!             Ok(0)
//!         },
//!         vec![
//!             PositionalArgument::new("greet").into(),
//!             NamedArgument::new("name").into(),
//!         ],
//!     )
//!     .expect("valid definitions");
//!
//! let args: Vec<String> = std::env::args().skip(1).collect();
//! let code = processor.process(&args);
//! ```

pub mod arguments;
pub mod handler;
pub mod invocation;
pub mod processor;
pub mod registry;
pub mod routing;
pub mod stdin;

pub use arguments::ArgumentDefinition;
pub use arguments::DefinitionError;
pub use arguments::NamedArgument;
pub use arguments::PositionalArgument;
pub use handler::CommandHandler;
pub use handler::ErrorHandler;
pub use handler::NamedArguments;
pub use processor::CommandProcessor;
pub use stdin::StdinSource;
