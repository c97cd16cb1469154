//! Test suites for the Launchpad daemon.

mod dispatch_unit;
mod support;
