use crate::{
    error::ConfigError,
    field::{FieldDomain, FieldValue},
    group::{self, Group},
};
use Field::{Explicit, Range};

/// A static declaration of one field, converted into a validated
/// `FieldDomain` when the catalogue is built.
enum Field {
    Range(&'static str, FieldValue),
    Explicit(&'static str, &'static [FieldValue]),
}

/// The instruction families whose handlers are specialized by encoding
/// fields.  Each entry lists the output artifact, the fields in the order of
/// the handler's template parameters, and the name of the handler template.
/// The field names match the variables that the decoder extracts from each
/// instruction before including the artifact.
#[rustfmt::skip]
const GROUPS: [(&str, &[Field], &str); 23] = [
    // ARM state.
    ("BRANCH_INSTR.gencpp", &[Range("link", 2)], "arm_branch"),
    ("ALU_INSTR.gencpp", &[Range("is_imm", 2), Range("aluop", 16), Range("set_cond", 2), Range("shift_type", 4), Range("shift_by_reg", 2)], "arm_alu"),
    // Multiply opcodes 2 and 3 are unassigned.
    ("MUL_INSTR.gencpp", &[Explicit("mulop", &[0, 1, 4, 5, 6, 7]), Range("set_cond", 2)], "arm_mul"),
    ("PSR_INSTR.gencpp", &[Range("psr", 2), Range("dir", 2)], "arm_psr"),
    ("MSR_IMM_INSTR.gencpp", &[Range("psr", 2)], "arm_msr_imm"),
    ("SDT_INSTR.gencpp", &[Range("reg_offset", 2), Range("prepost", 2), Range("updown", 2), Range("byteword", 2), Range("writeback", 2), Range("load", 2), Range("shift_type", 4)], "arm_sdt"),
    ("MISC_DT_INSTR.gencpp", &[Range("prepost", 2), Range("updown", 2), Range("imm_offset", 2), Range("writeback", 2), Range("load", 2), Range("sign", 2), Range("half", 2)], "arm_misc_dt"),
    ("BLOCK_DT_INSTR.gencpp", &[Range("prepost", 2), Range("updown", 2), Range("psr", 2), Range("writeback", 2), Range("load", 2)], "arm_block_dt"),
    ("SWP_INSTR.gencpp", &[Range("byteword", 2)], "arm_swp"),
    // Thumb state.  H = 1 is the ARMv5 `blx` suffix, undefined on
    // the ARM7TDMI.
    ("THUMB_BRANCH_INSTR.gencpp", &[Explicit("h", &[0, 2, 3])], "thumb_branch"),
    ("THUMB_SHIFT_INSTR.gencpp", &[Range("shift_type", 3)], "thumb_shift_reg"),
    ("THUMB_ADDSUB_INSTR.gencpp", &[Range("aluop", 4)], "thumb_addsub"),
    ("THUMB_ADDSUBCMPMOV_INSTR.gencpp", &[Range("aluop", 4)], "thumb_addsubcmpmov"),
    ("THUMB_ALU_INSTR.gencpp", &[Range("aluop", 16)], "thumb_alu"),
    ("THUMB_SPECIAL_DATA_INSTR.gencpp", &[Range("aluop", 3)], "thumb_special_data"),
    ("THUMB_LOADSTORE_REG_INSTR.gencpp", &[Range("code", 8)], "thumb_loadstore_reg"),
    ("THUMB_LOADSTORE_IMM_INSTR.gencpp", &[Range("code", 4)], "thumb_loadstore_imm"),
    ("THUMB_LOADSTORE_HALF_INSTR.gencpp", &[Range("code", 2)], "thumb_loadstore_half"),
    ("THUMB_LOADSTORE_SP_INSTR.gencpp", &[Range("code", 2)], "thumb_loadstore_sp"),
    ("THUMB_ADDPCSP_INSTR.gencpp", &[Range("code", 2)], "thumb_addpcsp"),
    ("THUMB_SP_ADD_INSTR.gencpp", &[Range("code", 2)], "thumb_sp_add"),
    ("THUMB_PUSHPOP_INSTR.gencpp", &[Range("code", 2), Range("pclr", 2)], "thumb_pushpop"),
    ("THUMB_MULTIPLE_INSTR.gencpp", &[Range("code", 2)], "thumb_multiple"),
];

/// Build and validate every declared instruction family, in declaration
/// order.
///
/// # Errors
/// Any `ConfigError` raised by an invalid field, group or catalogue.
pub fn groups() -> Result<Vec<Group>, ConfigError> {
    let groups = GROUPS
        .iter()
        .map(|(output, fields, target)| {
            let fields = fields
                .iter()
                .map(|field| match field {
                    Range(name, size) => FieldDomain::range(name, *size),
                    Explicit(name, values) => FieldDomain::explicit(name, values),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Group::new(output, fields, target)
        })
        .collect::<Result<Vec<_>, _>>()?;

    group::validate_catalogue(&groups)?;
    Ok(groups)
}
