// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors
// ABOUTME: Re-exports helper modules for mbg-cli
// ABOUTME: Provides flag parsing and output display utilities

pub mod display;
pub mod parse;
