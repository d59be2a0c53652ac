use relp_num::{R64, RB};
use relp_num::RationalBig;

use relp_dsl::compile::compile;
use relp_dsl::compile::error::{Compile, Malformed, Shape};
use relp_dsl::data::linear_program::elements::BoundKind;
use relp_dsl::data::linear_program::model::{Direction, LinearProgramModel};
use relp_dsl::data::surface::Comparator;
use relp_dsl::io::error::Import;
use relp_dsl::io::{export, import};

use super::{get_test_file_path, model, T};

#[test]
fn diet() {
    let model = model("diet");

    assert_eq!(model.direction, Direction::Min);
    assert_eq!(model.nr_rows(), 3);
    assert_eq!(model.nr_columns(), 3);
    assert_eq!(model.entries.len(), 9);
    assert_eq!(model.objective, [R64!(3) / R64!(5), R64!(6) / R64!(5), R64!(5) / R64!(2)]);

    let names = model.rows.iter().map(|row| row.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, ["R1", "R2", "R3"]);
    assert_eq!(model.rows[0].kind, BoundKind::Double);
    assert_eq!((&model.rows[0].lower, &model.rows[0].upper), (&R64!(2000), &R64!(3000)));
    assert_eq!(model.rows[1].kind, BoundKind::Lower);

    let kinds = model.columns.iter().map(|column| column.kind).collect::<Vec<_>>();
    assert_eq!(kinds, [BoundKind::Double, BoundKind::Double, BoundKind::Lower]);
}

#[test]
fn transport() {
    let model = model("transport");

    assert_eq!(model.nr_rows(), 5);
    assert_eq!(model.nr_columns(), 6);
    assert_eq!(model.entries.len(), 12);

    let (rows, columns) = model.kind_counts();
    assert_eq!(rows[BoundKind::Upper], 2);
    assert_eq!(rows[BoundKind::Fixed], 3);
    assert_eq!(columns[BoundKind::Lower], 6);

    // Each shipment appears in one supply and one demand row.
    for (column, entries) in model.column_major().into_iter().enumerate() {
        assert_eq!(entries.len(), 2, "column {}", column + 1);
        assert!(entries[0].0 <= 2 && entries[1].0 > 2);
    }
}

#[test]
fn product_mix() {
    let model = model("product_mix");

    assert_eq!(model.direction, Direction::Max);
    let names = model.rows.iter().map(|row| row.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, ["R1", "R2", "R3", "stools"]);

    // Terms stay in the order they were written.
    let third_row = model.entries.iter()
        .filter(|entry| entry.row == 3)
        .map(|entry| (entry.column, entry.coefficient.clone()))
        .collect::<Vec<_>>();
    assert_eq!(third_row, [(2, R64!(1)), (1, R64!(-2))]);

    // Bounds on scaled variables bound the variable itself.
    let tables = &model.columns[0];
    assert_eq!((tables.kind, &tables.lower), (BoundKind::Lower, &R64!(2)));
    let chairs = &model.columns[1];
    assert_eq!((chairs.kind, &chairs.lower, &chairs.upper), (BoundKind::Double, &R64!(0), &R64!(15)));
}

#[test]
fn compile_twice() {
    let problem = import::<T>(&get_test_file_path("product_mix")).unwrap();
    assert_eq!(compile(&problem), compile(&problem));
    assert_eq!(LinearProgramModel::try_from(&problem), compile(&problem));
}

#[test]
fn strict() {
    let problem = import::<T>(&get_test_file_path("strict")).unwrap();
    assert_eq!(
        compile(&problem),
        Err(Compile::InvalidComparator { comparator: Comparator::Less, shape: Shape::Simple }),
    );
}

fn import_and_compile(name: &str) -> Result<LinearProgramModel<T>, Import> {
    let problem = import::<T>(&get_test_file_path(name))?;
    let model = compile(&problem)?;

    Ok(model)
}

#[test]
fn import_then_compile() {
    assert!(import_and_compile("diet").is_ok());
    assert!(matches!(
        import_and_compile("strict"),
        Err(Import::Compile(Compile::InvalidComparator { comparator: Comparator::Less, .. })),
    ));
    assert!(matches!(import_and_compile("syntax_error"), Err(Import::Parse(_))));
}

#[test]
fn big_rationals() {
    let problem = import::<RationalBig>(&get_test_file_path("diet")).unwrap();
    let model = compile(&problem).unwrap();

    assert_eq!(model.nr_rows(), 3);
    assert_eq!(model.entries.len(), 9);
    assert_eq!(model.objective, [RB!(3) / RB!(5), RB!(6) / RB!(5), RB!(5) / RB!(2)]);
    assert_eq!((&model.rows[0].lower, &model.rows[0].upper), (&RB!(2000), &RB!(3000)));

    let kinds = model.columns.iter().map(|column| column.kind).collect::<Vec<_>>();
    assert_eq!(kinds, [BoundKind::Double, BoundKind::Double, BoundKind::Lower]);
}

#[test]
fn unknown_variable() {
    let problem = import::<T>(&get_test_file_path("unknown_variable")).unwrap();
    let error = compile(&problem).unwrap_err();

    assert_eq!(error, Compile::MalformedExpression(Malformed::UnknownVariable("z".to_string())));
    assert_eq!(error.code(), "MALFORMED_UNKNOWN_VARIABLE");
}

#[test]
fn syntax_error() {
    match import::<T>(&get_test_file_path("syntax_error")) {
        Err(Import::Parse(error)) => assert_eq!(error.line_number(), Some(4)),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn export_mps() {
    let problem = import::<f64>(&get_test_file_path("transport")).unwrap();
    let model = compile(&problem).unwrap();

    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("transport.mps");
    export(&model, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("NAME          transport\nROWS\n N  COST\n"));
    assert!(text.contains(" E  R5\n"));
    assert!(text.contains("    RHS       R3        325\n"));
    assert!(!text.contains("BOUNDS"));
    assert!(text.ends_with("ENDATA\n"));
}
