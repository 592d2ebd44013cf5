// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! consulate binary entry point.

use consulate_capture::Environment;

fn main() {
    consulate::logging::init();

    let mut env = Environment::process();
    consulate::run(std::env::args_os(), &mut env);
}
