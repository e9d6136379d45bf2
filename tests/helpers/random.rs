#![allow(dead_code)]

use rand::Rng;
use rand::seq::SliceRandom;

use streamsql_types::types::{Field, SqlStruct, SqlType};

pub fn random_type<R: Rng>(rng: &mut R, depth: u32) -> SqlType {
    let upper = if depth == 0 { 5 } else { 9 };
    match rng.random_range(0..upper) {
        0 => SqlType::Boolean,
        1 => SqlType::Integer,
        2 => SqlType::Bigint,
        3 => SqlType::Double,
        4 => SqlType::String,
        5 => {
            let precision = rng.random_range(1..=38);
            let scale = rng.random_range(0..=precision);
            SqlType::decimal(precision, scale).expect("valid decimal bounds")
        }
        6 => SqlType::array(random_type(rng, depth - 1)),
        7 => SqlType::map(SqlType::String, random_type(rng, depth - 1)),
        _ => SqlType::Struct(random_struct(rng, depth - 1)),
    }
}

// Prefixes that need quoting when rendered, plus a plain one.
const NAME_PREFIXES: [&str; 8] = ["F", "a b ", "1st_", "é", "x`y", "a,b", "my key ", "<>"];

/// Distinct names: a random prefix plus the field position. The first field
/// is sometimes the empty name.
pub fn random_name<R: Rng>(rng: &mut R, position: usize) -> String {
    if position == 0 && rng.random_bool(0.2) {
        return String::new();
    }
    let prefix = NAME_PREFIXES[rng.random_range(0..NAME_PREFIXES.len())];
    format!("{prefix}{position}")
}

/// Fields with distinct, sometimes awkward, names in shuffled order.
pub fn random_fields<R: Rng>(rng: &mut R, depth: u32) -> Vec<Field> {
    let count = rng.random_range(0..6usize);
    let mut fields: Vec<Field> = (0..count)
        .map(|i| {
            let name = random_name(rng, i);
            Field::of(name, random_type(rng, depth))
        })
        .collect();
    fields.shuffle(rng);
    fields
}

pub fn random_struct<R: Rng>(rng: &mut R, depth: u32) -> SqlStruct {
    struct_of(random_fields(rng, depth))
}

pub fn struct_of(fields: Vec<Field>) -> SqlStruct {
    SqlStruct::builder()
        .fields(fields)
        .expect("generated names are unique")
        .build()
}
