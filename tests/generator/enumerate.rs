use crate::{combinations_match, explicit, range};
use dispatchgen::{enumerate::Combinations, field::FieldDomain, group::Group};
use std::collections::HashSet;

#[test]
fn first_field_varies_slowest() {
    combinations_match!(
        vec![range("a", 2), range("b", 3)],
        [0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2],
    );
}

#[test]
fn explicit_domains_in_declaration_order() {
    combinations_match!(
        vec![explicit("h", &[0, 2, 3]), range("x", 2)],
        [0, 0], [0, 1], [2, 0], [2, 1], [3, 0], [3, 1],
    );
    combinations_match!(
        vec![range("x", 2), explicit("h", &[3, 0])],
        [0, 3], [0, 0], [1, 3], [1, 0],
    );
}

#[test]
fn single_valued_fields_still_participate() {
    combinations_match!(
        vec![range("a", 1), range("b", 2), range("c", 1)],
        [0, 0, 0], [0, 1, 0],
    );
    combinations_match!(vec![range("link", 1)], [0]);
}

#[test]
fn zero_fields_yield_one_empty_combination() {
    let fields: Vec<FieldDomain> = Vec::new();
    let combinations = Combinations::new(&fields).collect::<Vec<_>>();
    assert_eq!(combinations.len(), 1);
    assert!(combinations[0].is_empty());
}

#[test]
fn pairs_carry_field_names_in_order() {
    let fields = vec![range("is_imm", 2), explicit("mulop", &[5])];
    let first = Combinations::new(&fields).next().unwrap();
    assert_eq!(first.pairs(), &[("is_imm", 0_u32), ("mulop", 5_u32)][..]);
    assert_eq!(first.len(), 2);
}

#[test]
fn product_is_complete_and_unique() {
    let fields = vec![range("is_imm", 2), range("aluop", 16), range("set_cond", 2), range("shift_type", 4), range("shift_by_reg", 2)];
    let tuples = Combinations::new(&fields)
        .map(|c| c.values().collect::<Vec<_>>())
        .collect::<Vec<_>>();
    assert_eq!(tuples.len(), 2 * 16 * 2 * 4 * 2);

    let unique = tuples.iter().collect::<HashSet<_>>();
    assert_eq!(unique.len(), tuples.len());

    // Nested loops visit the product in ascending lexicographic order.
    let mut sorted = tuples.clone();
    sorted.sort();
    assert_eq!(sorted, tuples);
}

#[test]
fn size_hint_counts_down() {
    let fields = vec![range("a", 2), range("b", 3)];
    let mut combinations = Combinations::new(&fields);
    assert_eq!(combinations.size_hint(), (6, Some(6)));
    combinations.next();
    combinations.next();
    assert_eq!(combinations.size_hint(), (4, Some(4)));
    assert_eq!(combinations.by_ref().count(), 4);
    assert_eq!(combinations.size_hint(), (0, Some(0)));
    assert!(combinations.next().is_none());
}

#[test]
fn group_count_matches_enumeration() {
    let group = Group::new(
        "MUL_INSTR.gencpp",
        vec![explicit("mulop", &[0, 1, 4, 5, 6, 7]), range("set_cond", 2)],
        "arm_mul",
    )
    .unwrap();
    assert_eq!(group.combination_count(), 12);
    assert_eq!(group.combinations().count(), 12);
}

#[test]
fn exhausted_iterator_stays_exhausted() {
    let fields = vec![explicit("h", &[0, 2, 3])];
    let mut combinations = Combinations::new(&fields);
    assert_eq!(combinations.by_ref().count(), 3);
    assert!(combinations.next().is_none());
    assert!(combinations.next().is_none());
}
