// ABOUTME: Canonical column names and accepted aliases for each reference sheet
// ABOUTME: Aliases cover the Indonesian headers used in the published datasets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

/// A column by canonical (normalized) name plus accepted aliases
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Canonical name, reported in `MissingColumn`
    pub name: &'static str,
    /// Alternative normalized headers
    pub aliases: &'static [&'static str],
}

const fn column(name: &'static str, aliases: &'static [&'static str]) -> Column {
    Column { name, aliases }
}

// clean_data.csv / food_category.csv
pub const FOOD_ID: Column = column("id", &["food_id", "kode", "kode_bahan"]);
pub const FOOD_NAME: Column = column("name", &["nama", "nama_bahan", "nama_makanan", "food_name"]);
pub const PROTEIN_G: Column = column("protein_g", &["protein"]);
pub const FAT_G: Column = column("fat_g", &["lemak_g", "lemak", "fat"]);
pub const CARBOHYDRATE_G: Column = column(
    "carbohydrate_g",
    &["karbohidrat_g", "karbohidrat", "carbohydrate", "kh_g"],
);
pub const FIBER_G: Column = column("fiber_g", &["serat_g", "serat", "fiber"]);
pub const IS_ANIMAL: Column = column("is_animal", &["hewani", "is_hewani", "animal"]);
pub const FOOD_GROUP: Column = column(
    "food_group",
    &["kategori", "category", "kelompok_pangan", "kelompok_makanan"],
);

// age_group.csv
pub const AGE_MIN: Column = column("age_min", &["usia_min", "umur_min", "min_age"]);
pub const AGE_MAX: Column = column("age_max", &["usia_max", "umur_max", "max_age"]);
pub const EDUCATION_LEVEL: Column = column("education_level", &["level", "jenjang"]);
pub const GRADE: Column = column("grade", &["kelas", "class"]);
pub const DEFAULT_GENDER: Column = column("default_gender", &["gender", "jenis_kelamin", "jk"]);

// education_group.csv
pub const LEVEL: Column = column("level", &["jenjang", "education_level"]);
pub const CLASS_MIN: Column = column("class_min", &["kelas_min", "grade_min"]);
pub const CLASS_MAX: Column = column("class_max", &["kelas_max", "grade_max"]);
pub const GROUP_ID: Column = column("group_id", &["id_kelompok", "kelompok", "group"]);

// standar_mbg.csv
pub const MIN_ENERGY_KCAL: Column = column("min_energy_kcal", &["energi_min", "min_energi_kkal"]);
pub const MAX_ENERGY_KCAL: Column = column("max_energy_kcal", &["energi_max", "max_energi_kkal"]);
pub const MIN_PROTEIN_G: Column = column("min_protein_g", &["protein_min", "min_protein"]);
pub const MIN_ANIMAL_PROTEIN_G: Column = column(
    "min_animal_protein_g",
    &["protein_hewani_min", "min_protein_hewani_g", "min_animal_protein"],
);
pub const MIN_CARBOHYDRATE_G: Column = column(
    "min_carbohydrate_g",
    &["karbohidrat_min", "min_karbohidrat_g", "min_carbohydrate"],
);
pub const MIN_FIBER_G: Column = column("min_fiber_g", &["serat_min", "min_serat_g", "min_fiber"]);
pub const REQ_PROTEIN: Column = column("req_protein", &["wajib_lauk"]);
pub const REQ_CARB: Column = column("req_carb", &["wajib_makanan_pokok"]);
pub const REQ_VEG: Column = column("req_veg", &["wajib_sayur"]);
pub const REQ_FRUIT: Column = column("req_fruit", &["wajib_buah"]);

// takaran.csv
pub const PORTION_FOOD_NAME: Column = column(
    "food_name",
    &["nama_makanan", "nama_bahan", "nama", "name", "makanan"],
);
pub const PORTION_UNIT: Column = column("unit", &["satuan", "takaran", "ukuran"]);
pub const PORTION_GRAM: Column = column("gram", &["gram_g", "berat", "berat_g", "grams"]);
