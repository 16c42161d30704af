use chainkit_ary::{Ary, AryConfig, Key, SortFlags, Value};
use std::sync::Arc;

#[test]
fn mutations_chain_on_the_same_instance() {
    let mut ary = Ary::new();
    ary.push(3)
        .push(1)
        .set("name", "chainkit")
        .push(2)
        .unshift(0);

    assert_eq!(ary.len(), 5);
    assert_eq!(ary.first(), Some(&Value::Int(0)));
    assert_eq!(ary.get("name"), Some(&Value::from("chainkit")));

    let mut ptr_check = Ary::from(vec![5, 4]);
    let before = &ptr_check as *const Ary;
    let after = ptr_check.sort(None).push(6) as *const Ary;
    assert_eq!(before, after);
    assert_eq!(ptr_check, Ary::from(vec![4, 5, 6]));
}

#[test]
fn transformations_leave_the_source_untouched() {
    let source = Ary::from(vec![1, 0, 2, 3, 2]);
    let snapshot = source.clone();

    let cleaned = source.clean();
    let unique = source.unique();
    let sliced = source.slice(1, Some(2), None);
    let reversed = source.reverse(None);

    assert_eq!(source, snapshot);
    assert_eq!(cleaned.len(), 4);
    assert_eq!(unique, Ary::from_pairs([(0, 1), (1, 0), (2, 2), (3, 3)]));
    assert_eq!(sliced, Ary::from(vec![0, 2]));
    assert_eq!(reversed, Ary::from(vec![2, 3, 2, 0, 1]));
}

#[test]
fn derived_collections_inherit_config() {
    let config = Arc::new(AryConfig {
        json_pretty: false,
        sort_flags: SortFlags::NATURAL,
        ..AryConfig::default()
    });
    let mut ary = Ary::with_config(Arc::clone(&config));
    ary.push("file10").push("file2").push("file1");

    let mut tail = ary.slice(0, None, None);
    tail.sort(None);
    assert_eq!(tail.config(), config.as_ref());
    assert_eq!(
        tail.to_json(None).expect("encode"),
        r#"["file1","file2","file10"]"#
    );
}

#[test]
fn pipeline_over_rows() {
    let json = r#"[
        {"id": 1, "name": "tea", "price": "3.5"},
        {"id": 2, "name": "cake", "price": 4},
        {"id": 3, "name": "pie", "price": 2}
    ]"#;
    let rows = Ary::from_json(json).expect("rows should decode");

    let cheap = rows.where_fn(&Key::from("price"), |p| {
        p.to_number().is_some_and(|n| n < 4.0)
    });
    let names = cheap.column(Some(&Key::from("name")), None);
    assert_eq!(names.join(","), "tea,pie");

    let total = rows.column(Some(&Key::from("price")), None).sum();
    assert_eq!(total, Value::Float(9.5));
}
