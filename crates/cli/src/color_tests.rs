// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

fn force_color() {
    std::env::set_var("COLOR", "1");
    std::env::remove_var("NO_COLOR");
}

fn disable_color() {
    std::env::set_var("NO_COLOR", "1");
    std::env::remove_var("COLOR");
}

#[test]
#[serial]
fn styles_returns_styled_when_color_forced() {
    force_color();
    let debug = format!("{:?}", styles());
    assert_ne!(debug, format!("{:?}", Styles::plain()));
}

#[test]
#[serial]
fn styles_returns_plain_when_no_color() {
    disable_color();
    let debug = format!("{:?}", styles());
    assert_eq!(debug, format!("{:?}", Styles::plain()));
}

#[test]
#[serial]
fn painters_wrap_text_in_their_code() {
    force_color();
    let painters: [(fn(&str) -> String, u8); 6] = [
        (header, codes::HEADER),
        (context, codes::CONTEXT),
        (muted, codes::MUTED),
        (success, codes::SUCCESS),
        (failure, codes::FAILURE),
        (warning, codes::WARNING),
    ];
    for (paint_fn, code) in painters {
        assert_eq!(paint_fn("vpc"), format!("\x1b[38;5;{code}mvpc\x1b[0m"));
    }
}

#[test]
#[serial]
fn no_color_wins_over_forced_color() {
    std::env::set_var("COLOR", "1");
    std::env::set_var("NO_COLOR", "1");
    assert_eq!(failure("vpc"), "vpc");
    std::env::remove_var("COLOR");
}

#[test]
#[serial]
fn plain_text_when_color_disabled() {
    disable_color();
    assert_eq!(success("bucket"), "bucket");
    assert_eq!(header("Failed"), "Failed");
}
