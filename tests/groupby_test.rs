mod common;

use std::collections::HashSet;
use std::sync::Arc;

use common::{init_logging, setup_sales_df, setup_test_df};
use grouptab::error::{Error, Result};
use grouptab::{CompositeKey, DataFrame, GroupedDataFrame, Value};

#[test]
fn test_group_by_single_column() -> Result<()> {
    init_logging();
    let df = setup_test_df()?;
    let grouped = df.group_by(["a"])?;

    assert_eq!(grouped.group_count(), 3);
    assert_eq!(grouped.grouping_colnames(), &["a".to_string()]);

    let members: Vec<Vec<usize>> = grouped
        .groups()
        .map(|g| g.row_positions().to_vec())
        .collect();
    assert_eq!(members, vec![vec![0, 3], vec![1, 4], vec![2, 5]]);

    // ids follow first appearance
    let keys: Vec<&CompositeKey> = grouped.groups().map(|g| g.key()).collect();
    assert_eq!(keys[0].values(), &[Value::Int64(1)]);
    assert_eq!(keys[1].values(), &[Value::Int64(2)]);
    assert_eq!(keys[2].values(), &[Value::Int64(3)]);

    Ok(())
}

#[test]
fn test_group_by_multiple_columns() -> Result<()> {
    let df = setup_test_df()?;
    let grouped = df.group_by(["a", "c"])?;
    assert_eq!(grouped.group_count(), 3);

    // every (a, b) pair in the fixture is distinct
    let grouped = df.group_by(["a", "b"])?;
    assert_eq!(grouped.group_count(), 6);
    assert!(grouped.groups().all(|g| g.len() == 1));

    let group = grouped
        .find_group(&[Value::Int64(1), Value::from("c")])
        .expect("group (1, c)");
    assert_eq!(group.row_positions(), &[3]);
    assert_eq!(group.key_value("b"), Some(&Value::from("c")));

    Ok(())
}

#[test]
fn test_every_row_in_exactly_one_group() -> Result<()> {
    let df = setup_sales_df()?;
    let grouped = df.group_by(["group"])?;

    let mut seen = Vec::new();
    for group in &grouped {
        assert!(!group.is_empty());
        assert_eq!(group.frame().nrow(), group.len());
        seen.extend_from_slice(group.row_positions());
    }
    seen.sort_unstable();
    assert_eq!(seen, (0..df.nrow()).collect::<Vec<_>>());

    Ok(())
}

#[test]
fn test_same_group_iff_equal_keys() -> Result<()> {
    let df = setup_sales_df()?;
    let grouped = df.group_by(["group"])?;
    let keys = df.column("group")?;

    for i in 0..df.nrow() {
        for j in 0..df.nrow() {
            let same_group = grouped.group_of_row(i) == grouped.group_of_row(j);
            let same_key = keys.get(i)? == keys.get(j)?;
            assert_eq!(same_group, same_key, "rows {} and {}", i, j);
        }
    }

    Ok(())
}

#[test]
fn test_group_ids_per_row() -> Result<()> {
    let df = setup_sales_df()?;
    let grouped = df.group_by(["group"])?;

    // A, B, A, B, A, C, B, C, C, A
    assert_eq!(grouped.group_ids(), &[0, 1, 0, 1, 0, 2, 1, 2, 2, 0]);
    assert_eq!(grouped.group_of_row(5), Some(2));
    assert_eq!(grouped.group_of_row(10), None);

    let b = grouped.group_by_id(1).expect("group 1");
    assert_eq!(b.key_value("group"), Some(&Value::from("B")));
    assert_eq!(
        b.column("value")?.values(),
        &[Value::Int64(25), Value::Int64(30), Value::Int64(24)]
    );
    assert!(grouped.group_by_id(3).is_none());

    Ok(())
}

#[test]
fn test_group_rows_keep_base_order() -> Result<()> {
    let df = setup_sales_df()?;
    let grouped = df.group_by(["group"])?;
    let a = grouped.find_group(&[Value::from("A")]).expect("group A");

    assert_eq!(a.row_positions(), &[0, 2, 4, 9]);
    let values = a
        .rows()
        .map(|row| row.get("value").cloned())
        .collect::<Result<Vec<Value>>>()?;
    assert_eq!(
        values,
        vec![
            Value::Int64(10),
            Value::Int64(15),
            Value::Int64(22),
            Value::Int64(20)
        ]
    );

    Ok(())
}

#[test]
fn test_regrouping_is_stable() -> Result<()> {
    let df = setup_sales_df()?;
    let first = df.group_by(["group"])?;
    let second = df.group_by(["group"])?;

    let members = |g: &GroupedDataFrame| -> Vec<(CompositeKey, Vec<usize>)> {
        g.groups()
            .map(|grp| (grp.key().clone(), grp.row_positions().to_vec()))
            .collect()
    };
    assert_eq!(members(&first), members(&second));

    let regrouped = first.group(Vec::<String>::new())?;
    assert_eq!(members(&first), members(&regrouped));

    Ok(())
}

#[test]
fn test_null_keys_form_a_group() -> Result<()> {
    let df = DataFrame::from_columns(vec![
        grouptab::Column::from_values("k", vec![Some(1i64), None, Some(1), None])?,
        grouptab::Column::int64("v", vec![1, 2, 3, 4]),
    ])?;
    let grouped = df.group_by(["k"])?;

    assert_eq!(grouped.group_count(), 2);
    let nulls = grouped.find_group(&[Value::Null]).expect("null group");
    assert_eq!(nulls.row_positions(), &[1, 3]);

    Ok(())
}

#[test]
fn test_ungroup_returns_base_table() -> Result<()> {
    let df = setup_test_df()?;
    let base = Arc::new(df.clone());
    let grouped = GroupedDataFrame::new(Arc::clone(&base), ["a"])?;

    assert!(Arc::ptr_eq(&grouped.base(), &base));
    assert_eq!(grouped.ungroup(), &df);
    assert_eq!(grouped.colnames(), df.colnames());

    let back = grouped.into_ungrouped();
    assert_eq!(*back, df);

    Ok(())
}

#[test]
fn test_group_by_errors() -> Result<()> {
    let df = setup_test_df()?;

    assert!(matches!(
        df.group_by(Vec::<&str>::new()),
        Err(Error::EmptyGroupingColumns)
    ));
    assert!(matches!(
        df.group_by(["a", "missing"]),
        Err(Error::ColumnNotFound(name)) if name == "missing"
    ));

    Ok(())
}

#[test]
fn test_empty_table_has_no_groups() -> Result<()> {
    let df = DataFrame::from_columns(vec![grouptab::Column::int64("k", vec![])])?;
    let grouped = df.group_by(["k"])?;

    assert_eq!(grouped.group_count(), 0);
    assert!(grouped.group_ids().is_empty());

    Ok(())
}

#[test]
fn test_subset_keeps_grouping() -> Result<()> {
    let df = setup_test_df()?;
    let grouped = df.group_by(["a"])?;
    let subset = grouped.subset(["b", "a"])?;

    assert_eq!(subset.colnames(), &["b".to_string(), "a".to_string()]);
    assert_eq!(subset.grouping_colnames(), grouped.grouping_colnames());
    assert_eq!(subset.group_ids(), grouped.group_ids());

    Ok(())
}

#[test]
fn test_subset_errors() -> Result<()> {
    let df = setup_test_df()?;
    let grouped = df.group_by(["a"])?;

    assert!(matches!(
        grouped.subset(["b", "nope"]),
        Err(Error::ColumnNotFound(_))
    ));
    assert!(matches!(
        grouped.subset(["b", "c"]),
        Err(Error::InvalidArgument(_))
    ));

    Ok(())
}

#[test]
fn test_group_adds_columns() -> Result<()> {
    let df = setup_test_df()?;
    let grouped = df.group_by(["a"])?;
    let finer = grouped.group(["b"])?;

    // requested columns first, then the existing ones
    assert_eq!(finer.grouping_colnames(), &["b".to_string(), "a".to_string()]);
    assert_eq!(finer.group_count(), 6);
    assert!(Arc::ptr_eq(&finer.base(), &grouped.base()));

    // grouping again on an existing column changes nothing
    let same = grouped.group(["a"])?;
    assert_eq!(same.grouping_colnames(), grouped.grouping_colnames());
    assert_eq!(same.group_ids(), grouped.group_ids());

    Ok(())
}

#[test]
fn test_group_keys_are_distinct() -> Result<()> {
    let df = setup_sales_df()?;
    let grouped = df.group_by(["group", "price"])?;

    let keys: HashSet<&CompositeKey> = grouped.groups().map(|g| g.key()).collect();
    assert_eq!(keys.len(), grouped.group_count());

    Ok(())
}

#[test]
fn test_free_function_matches_method() -> Result<()> {
    let df = setup_test_df()?;
    let via_fn = grouptab::group_by(df.clone(), ["a"])?;
    let via_method = df.into_grouped(["a"])?;

    assert_eq!(via_fn.group_ids(), via_method.group_ids());

    Ok(())
}

#[test]
fn test_signed_zero_keys_share_a_group() -> Result<()> {
    let df = DataFrame::from_columns(vec![grouptab::Column::float64(
        "k",
        vec![0.0, -0.0, 0.0],
    )])?;
    let grouped = df.group_by(["k"])?;

    assert_eq!(grouped.group_count(), 1);
    assert_eq!(grouped.group_ids(), &[0, 0, 0]);
    let zero = grouped.find_group(&[Value::Float64(-0.0)]).expect("zero group");
    assert_eq!(zero.row_positions(), &[0, 1, 2]);

    Ok(())
}

#[test]
fn test_find_group_misses() -> Result<()> {
    let df = setup_test_df()?;
    let grouped = df.group_by(["a", "b"])?;

    assert!(grouped
        .find_group(&[Value::Int64(1), Value::from("b")])
        .is_none());
    // keys must list every grouping column
    assert!(grouped.find_group(&[Value::Int64(1)]).is_none());
    for group in &grouped {
        let found = grouped.find_group(group.key().values()).expect("own key");
        assert_eq!(found.id(), group.id());
    }

    Ok(())
}

#[test]
fn test_group_by_ref_clones_base() -> Result<()> {
    let df = setup_test_df()?;
    let grouped = df.group_by(["a"])?;

    // an equal table sharing column buffers, not the caller's handle
    assert_eq!(grouped.ungroup(), &df);
    let original = df.column("b")?.values();
    let shared = grouped.ungroup().column("b")?.values();
    assert!(std::ptr::eq(original.as_ptr(), shared.as_ptr()));

    let base = Arc::new(df);
    let owned = GroupedDataFrame::new(Arc::clone(&base), ["a"])?;
    assert!(Arc::ptr_eq(&owned.base(), &base));

    Ok(())
}
