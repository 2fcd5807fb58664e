//! Shared inputs for the benches.

pub static NESTED: &str = r#"
{{ Geometry helpers {{ kept short }} }}
(define (area shape)
  (match shape
    [circle r] (* 3.14159 r r)
    [rect w h] (* w h)
    [poly points] (fold + 0 (map (lambda [p] (cross p)) points))))

(define table {
  'a' 0x61 'b' 0x62 'c' 0x63
  `raw \ text` "escaped \"quotes\""
  0b1010 0o777 123.456 => <=> ?: |>
})
"#;

/// `NESTED` repeated `times` times.
pub fn repeated(times: usize) -> String {
    NESTED.repeat(times)
}
