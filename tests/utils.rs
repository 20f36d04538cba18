use svg2tikz::transform_str_default;

pub fn convert(input: &str) -> String {
    transform_str_default(input).expect("conversion failure")
}

#[allow(dead_code)]
pub fn contains(input: &str, expected: &str) {
    let output = convert(input);
    assert!(
        output.contains(expected),
        "\n {}\nnot found in\n {}",
        expected,
        output
    );
}
