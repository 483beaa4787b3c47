//! Compile-pass and compile-fail tests: the derive and bound surface in
//! a fresh crate context.

#[test]
fn ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/*.rs");
}

#[test]
fn rejections() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/compile_fail/*.rs");
}
