// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use msgrs::Cli;

fn main() {
    let cli = Cli::parse();
    std::process::exit(msgrs::run(cli));
}
