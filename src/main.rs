// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use snp_template::errors::SnpError;

fn main() -> Result<(), SnpError> {
    snp_template::run()
}
