//! Cross-format conversions through the public API.

use anfconv_base::{Monomial, Polynomial, System};
use anfconv_format::{convert, Format, Options};
use std::collections::HashMap;

/// Monomial multiset of a polynomial.
fn multiset(poly: &Polynomial) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for monomial in poly.iter() {
        *counts.entry(monomial.to_string()).or_insert(0) += 1;
    }
    counts
}

fn assert_same_shape(a: &System, b: &System) {
    assert_eq!(a.num_vars(), b.num_vars(), "variable count");
    assert_eq!(a.len(), b.len(), "polynomial count");
    for (pa, pb) in a.polynomials.iter().zip(&b.polynomials) {
        assert_eq!(multiset(pa), multiset(pb));
    }
}

fn sample() -> System {
    System::new(
        ["x1", "x2", "x3"].iter().map(|s| s.to_string()).collect(),
        vec![
            Polynomial::parse("x1*x2+x3+1"),
            Polynomial::parse("x2*x3+x1"),
            Polynomial::parse("x3+1"),
        ],
    )
}

fn through(system: &System, via: Format) -> System {
    let options = Options::default();
    let bytes = via.render(system, &options).expect("render");
    via.read(bytes.as_slice(), &options).expect("read back")
}

#[test]
fn test_text_formats_round_trip() {
    let system = sample();
    for format in [Format::Msolve, Format::Xl, Format::Magma, Format::Json] {
        let back = through(&system, format);
        assert_eq!(back, system, "via .{format}");
    }
}

#[test]
fn test_sat_round_trip_keeps_shape() {
    let system = sample();
    let back = through(&system, Format::Anf);
    assert_same_shape(&system, &back);
    assert_eq!(back.variables, system.variables);
}

#[test]
fn test_sat_round_trip_with_named_variables() {
    let system = System::new(
        vec!["a".into(), "b".into(), "c".into()],
        vec![Polynomial::parse("a*c+b"), Polynomial::parse("c+1")],
    );
    let back = through(&system, Format::Anf);
    assert_same_shape(&system, &back);
    // Names are positional after the SAT leg.
    assert_eq!(back.polynomials[0].to_string(), "x1*x3+x2");
    assert_eq!(back.polynomials[1].to_string(), "x3+1");
}

#[test]
fn test_msolve_to_sat_to_magma() {
    let options = Options::default();
    let sat = convert(
        "x1,x2\n2\nx1+x2,\nx1+x2+1".as_bytes(),
        Format::Msolve,
        Format::Anf,
        &options,
    )
    .unwrap();
    assert_eq!(String::from_utf8(sat.clone()).unwrap(), "p cnf 2 2\nx 1 2 T 0\nx 1 2 0\n");

    let magma = convert(sat.as_slice(), Format::Anf, Format::Magma, &options).unwrap();
    let text = String::from_utf8(magma).unwrap();
    assert!(text.contains("f0 := x1+x2;"));
    assert!(text.contains("f1 := x1+x2+1;"));
}

#[test]
fn test_sat_example_decodes_to_named_monomial() {
    let system = Format::Anf
        .read("p cnf 2 1\nx .2 1 2 0\n".as_bytes(), &Options::default())
        .unwrap();
    assert_eq!(system.variables, vec!["x1", "x2"]);
    assert_eq!(
        system.polynomials[0].monomials,
        vec![Monomial::product(["x1", "x2"]), Monomial::One]
    );
}

#[test]
fn test_newline_list_drops_squares_after_msolve() {
    let options = Options::default();
    let out = convert(
        "a,b\n2\na^2+b,\na*b,\nb^2+1".as_bytes(),
        Format::Msolve,
        Format::Xl,
        &options,
    )
    .unwrap();
    let back = Format::Xl.read(out.as_slice(), &options).unwrap();
    assert_eq!(back.len(), 1);
    assert_eq!(back.polynomials[0].to_string(), "a*b");
}

#[test]
fn test_cubic_system_cannot_become_sat() {
    let options = Options::default();
    let result = convert(
        "a,b,c\n2\na*b*c+1".as_bytes(),
        Format::Msolve,
        Format::Anf,
        &options,
    );
    assert!(result.is_err());
}
