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

//! Routes from error kinds to the handlers recovering from them

use crate::command::handler::ErrorHandler;
use crate::errors::Error;
use crate::errors::ErrorKind;

pub struct ExceptionRoute {
    pub kind: ErrorKind,

    pub handler: Box<dyn ErrorHandler>,
}

/// Error routes of one command processor in registration order
#[derive(Default)]
pub struct RoutingTable {
    routes: Vec<ExceptionRoute>,
}

impl std::fmt::Debug for RoutingTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list()
            .entries(self.routes.iter().map(|r| r.kind))
            .finish()
    }
}

impl RoutingTable {
    pub fn new() -> Self {
        RoutingTable::default()
    }

    pub fn push(&mut self, kind: ErrorKind, handler: Box<dyn ErrorHandler>) {
        self.routes.push(ExceptionRoute { kind, handler });
    }

    /// Exit code of the first route handling the kind of `error`
    pub fn route(&self, error: &Error) -> Option<i32> {
        let kind = error.kind();
        self.routes
            .iter()
            .find(|route| route.kind == kind)
            .map(|route| route.handler.handle(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_route_wins() {
        let mut table = RoutingTable::new();
        table.push(ErrorKind::Io, Box::new(|_: &Error| 10));
        table.push(ErrorKind::Io, Box::new(|_: &Error| 20));

        assert_eq!(Some(10), table.route(&Error::io("disk full")));
    }

    #[test]
    fn other_kinds_are_not_routed() {
        let mut table = RoutingTable::new();
        table.push(ErrorKind::Io, Box::new(|_: &Error| 10));

        assert_eq!(None, table.route(&Error::general("boom")));
    }

    #[test]
    fn application_kinds_are_compared_by_name() {
        let mut table = RoutingTable::new();
        table.push(ErrorKind::Application("network"), Box::new(|_: &Error| 30));
        table.push(ErrorKind::Application("database"), Box::new(|_: &Error| 40));

        assert_eq!(Some(40), table.route(&Error::application("database", "down")));
        assert_eq!(None, table.route(&Error::application("disk", "full")));
    }

    #[test]
    fn handler_receives_the_error() {
        let mut table = RoutingTable::new();
        table.push(
            ErrorKind::Configuration,
            Box::new(|e: &Error| e.message().len() as i32),
        );

        assert_eq!(Some(3), table.route(&Error::configuration("bad")));
    }
}
