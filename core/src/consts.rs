/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const LOCK_DURATION_HOURS: i64 = 24;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_LIMIT: u64 = 20;

pub const DEFAULT_PR_STATUS: &str = "open";

pub const SEED_PORT_STATUS: &str = "broken";

/// `(name, category, description)` of the ports created on first boot.
pub const SEED_PORTS: [(&str, &str, &str); 5] = [
    ("textproc/ripgrep", "textproc", "Fast grep alternative"),
    ("devel/git", "devel", "Distributed version control system"),
    ("www/nginx", "www", "HTTP and reverse proxy server"),
    (
        "databases/postgresql13",
        "databases",
        "PostgreSQL database server",
    ),
    ("lang/rust", "lang", "Rust programming language"),
];

/// `(username, name)` of the initial developer roster.
pub const SEED_USERS: [(&str, &str); 8] = [
    ("tuxillo", "Antonio Huete Jimenez"),
    ("dillonb", "Dillon"),
    ("sephe", "Sepherosa Ziehau"),
    ("zrj-rim", "Rimvydas Jasinskas"),
    ("swildner", "Sascha Wildner"),
    ("corecode", "Simon Schubert"),
    ("y0netan1", "Tomohiro Kusumi"),
    ("dclink", "Daniel Carosone"),
];
