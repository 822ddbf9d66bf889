// ABOUTME: Common benchmark utilities for menu evaluation benchmarks
// ABOUTME: Exposes the synthetic reference tables and menu generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

pub mod fixtures;
