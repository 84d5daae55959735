use crate::{explicit, range};
use dispatchgen::{
    error::ConfigError,
    group::{validate_catalogue, Group},
};

#[test]
fn accessors_and_display() {
    let group = Group::new(
        "MUL_INSTR.gencpp",
        vec![explicit("mulop", &[0, 1, 4, 5, 6, 7]), range("set_cond", 2)],
        "arm_mul",
    )
    .unwrap();
    assert_eq!(group.output_name(), "MUL_INSTR.gencpp");
    assert_eq!(group.target_name(), "arm_mul");
    assert_eq!(group.fields().len(), 2);
    assert_eq!(group.to_string(), "arm_mul(mulop:{0,1,4,5,6,7}, set_cond:2)");
}

#[test]
fn empty_group_has_one_combination() {
    let group = Group::new("NONE.gencpp", Vec::new(), "handler").unwrap();
    assert_eq!(group.combination_count(), 1);
}

#[test]
fn invalid_groups() {
    for output in &["", ".", "..", "src/ALU_INSTR.gencpp", "..\\ALU_INSTR.gencpp"] {
        assert_eq!(
            Group::new(output, vec![range("link", 2)], "arm_branch"),
            Err(ConfigError::InvalidOutputName { output: (*output).to_owned() })
        );
    }
    assert_eq!(
        Group::new("BRANCH_INSTR.gencpp", vec![range("link", 2)], "arm_branch<1>"),
        Err(ConfigError::InvalidIdentifier { name: "arm_branch<1>".to_owned() })
    );
    assert_eq!(
        Group::new("PSR_INSTR.gencpp", vec![range("psr", 2), range("psr", 2)], "arm_psr"),
        Err(ConfigError::DuplicateField {
            output: "PSR_INSTR.gencpp".to_owned(),
            field: "psr".to_owned(),
        })
    );
}

#[test]
fn too_many_combinations() {
    let fields = (0..8).map(|idx| range(&format!("f{}", idx), u32::MAX)).collect();
    assert_eq!(
        Group::new("HUGE.gencpp", fields, "huge"),
        Err(ConfigError::TooManyCombinations { output: "HUGE.gencpp".to_owned() })
    );
}

#[test]
fn duplicate_outputs() {
    let branch = Group::new("BRANCH_INSTR.gencpp", vec![range("link", 2)], "arm_branch").unwrap();
    let swap = Group::new("SWP_INSTR.gencpp", vec![range("byteword", 2)], "arm_swp").unwrap();
    assert_eq!(validate_catalogue(&[branch.clone(), swap.clone()]), Ok(()));
    assert_eq!(
        validate_catalogue(&[branch.clone(), swap, branch]),
        Err(ConfigError::DuplicateOutput { output: "BRANCH_INSTR.gencpp".to_owned() })
    );
}

#[test]
fn errors_name_their_subject() {
    let duplicate = ConfigError::DuplicateOutput { output: "SWP_INSTR.gencpp".to_owned() };
    assert_eq!(duplicate.subject(), "SWP_INSTR.gencpp");
    let value = ConfigError::DuplicateValue { field: "mulop".to_owned(), value: 4 };
    assert_eq!(value.subject(), "mulop");
    let identifier = ConfigError::InvalidIdentifier { name: "arm alu".to_owned() };
    assert_eq!(identifier.subject(), "arm alu");
}
