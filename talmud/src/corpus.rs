//! Corpus tables: Bavli tractate names and daf pages, used to populate the
//! browser UI's dropdowns.

/// The 40 tractates of the Babylonian Talmud with Gemara, in canonical order.
pub const TRACTATES: [&str; 40] = [
    "Berakhot",
    "Shabbat",
    "Eruvin",
    "Pesachim",
    "Shekalim",
    "Yoma",
    "Sukkah",
    "Beitzah",
    "Rosh Hashanah",
    "Taanit",
    "Megillah",
    "Moed Katan",
    "Chagigah",
    "Yevamot",
    "Ketubot",
    "Nedarim",
    "Nazir",
    "Sotah",
    "Gittin",
    "Kiddushin",
    "Bava Kamma",
    "Bava Metzia",
    "Bava Batra",
    "Sanhedrin",
    "Makkot",
    "Shevuot",
    "Avodah Zarah",
    "Horayot",
    "Zevachim",
    "Menachot",
    "Chullin",
    "Bekhorot",
    "Arakhin",
    "Temurah",
    "Keritot",
    "Meilah",
    "Kinnim",
    "Tamid",
    "Middot",
    "Niddah",
];

/// Generates the daf pages `2a, 2b, 3a, ... 180b`. Pagination starts at daf 2
/// by printing convention; 180 covers the longest tractate.
pub fn pages() -> Vec<String> {
    (2..=180)
        .flat_map(|daf| ["a", "b"].into_iter().map(move |side| format!("{daf}{side}")))
        .collect()
}
