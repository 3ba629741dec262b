use arith_ast::visit::Visitable;
use arith_ast::{from_json, to_json, AstPrinter, Node};
use arith_parser::parse_expression;
use pretty_assertions::assert_eq;

#[test]
fn print_sample_expression_tree() {
    let expr = parse_expression("w ( 1 + r ) ^ n - f / 2").unwrap();

    let expected = "\
(-)
  (*)
    w
    (^)
      (+)
        1
        r
      n
  (/)
    f
    2
";
    assert_eq!(AstPrinter::print(&expr), expected);

    let mut printer = AstPrinter::new();
    expr.accept(&mut printer).unwrap();
    assert_eq!(printer.into_inner(), expected);
}

#[test]
fn parsed_tree_survives_json() {
    let expr = parse_expression("( a - b ) c").unwrap();
    let json = to_json(&expr).unwrap();
    let back: Node = from_json(&json).unwrap();
    assert_eq!(back, expr);
    assert_eq!(back.to_string(), "((a - b) * c)");
}
