/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

use dporter_core::input::*;

#[test]
fn test_port_in_range() {
    let port = port_in_range("8080").unwrap();
    assert_eq!(port, 8080);

    let port = port_in_range("65535").unwrap();
    assert_eq!(port, 65535);

    let port = port_in_range("65536").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("0").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("http").unwrap_err();
    assert_eq!(port, "`http` is not a port number");
}

#[test]
fn test_greater_than_zero() {
    assert_eq!(greater_than_zero::<u32>("10").unwrap(), 10);
    assert_eq!(
        greater_than_zero::<u32>("0").unwrap_err(),
        "`0` is not larger than 0"
    );
    assert_eq!(
        greater_than_zero::<i64>("-1").unwrap_err(),
        "`-1` is not larger than 0"
    );
    assert_eq!(
        greater_than_zero::<u32>("ten").unwrap_err(),
        "`ten` is not a valid number"
    );
}

#[test]
fn test_parse_query_number() {
    assert_eq!(parse_query_number(Some("3")), 3);
    assert_eq!(parse_query_number(Some(" 7 ")), 7);
    assert_eq!(parse_query_number(Some("-5")), -5);
    assert_eq!(parse_query_number(Some("abc")), 0);
    assert_eq!(parse_query_number(Some("")), 0);
    assert_eq!(parse_query_number(None), 0);
}

#[test]
fn test_validate_username() {
    assert!(validate_username("tuxillo").is_ok());
    assert!(validate_username("zrj-rim").is_ok());
    assert_eq!(
        validate_username("").unwrap_err(),
        "Username cannot be empty"
    );
    assert_eq!(
        validate_username("new dev").unwrap_err(),
        "Username cannot contain whitespace"
    );
}
