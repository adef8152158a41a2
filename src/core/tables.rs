use crate::domain::model::YearCode;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Week-of-half-year codes. Note `N` precedes `L`.
const WEEK_CODES: [(char, u32); 27] = [
    ('1', 1),
    ('2', 2),
    ('3', 3),
    ('4', 4),
    ('5', 5),
    ('6', 6),
    ('7', 7),
    ('8', 8),
    ('9', 9),
    ('C', 10),
    ('D', 11),
    ('F', 12),
    ('G', 13),
    ('H', 14),
    ('J', 15),
    ('K', 16),
    ('M', 17),
    ('N', 18),
    ('L', 19),
    ('P', 20),
    ('Q', 21),
    ('R', 22),
    ('T', 23),
    ('V', 24),
    ('W', 25),
    ('X', 26),
    ('Y', 27),
];

const FIRST_HALF: u32 = 0;
const SECOND_HALF: u32 = 26;

/// Year codes: calendar year plus the half-year offset in weeks.
const YEAR_CODES: [(char, i32, u32); 20] = [
    ('C', 2020, FIRST_HALF),
    ('D', 2020, SECOND_HALF),
    ('F', 2021, FIRST_HALF),
    ('G', 2021, SECOND_HALF),
    ('H', 2022, FIRST_HALF),
    ('J', 2022, SECOND_HALF),
    ('K', 2013, FIRST_HALF),
    ('L', 2013, SECOND_HALF),
    ('M', 2014, FIRST_HALF),
    ('N', 2014, SECOND_HALF),
    ('P', 2015, FIRST_HALF),
    ('Q', 2015, SECOND_HALF),
    ('R', 2016, FIRST_HALF),
    ('S', 2016, SECOND_HALF),
    ('T', 2017, FIRST_HALF),
    ('V', 2017, SECOND_HALF),
    ('W', 2018, FIRST_HALF),
    ('X', 2018, SECOND_HALF),
    ('Y', 2019, FIRST_HALF),
    ('Z', 2019, SECOND_HALF),
];

static WEEK_CODE_TABLE: LazyLock<HashMap<char, u32>> =
    LazyLock::new(|| WEEK_CODES.into_iter().collect());

static YEAR_CODE_TABLE: LazyLock<HashMap<char, YearCode>> = LazyLock::new(|| {
    YEAR_CODES
        .into_iter()
        .map(|(code, year, half_year_offset_weeks)| {
            (
                code,
                YearCode {
                    year,
                    half_year_offset_weeks,
                },
            )
        })
        .collect()
});

pub fn week_code(code: char) -> Option<u32> {
    WEEK_CODE_TABLE.get(&code).copied()
}

pub fn year_code(code: char) -> Option<YearCode> {
    YEAR_CODE_TABLE.get(&code).copied()
}

pub fn week_codes() -> impl Iterator<Item = char> {
    WEEK_CODES.iter().map(|(code, _)| *code)
}

pub fn year_codes() -> impl Iterator<Item = char> {
    YEAR_CODES.iter().map(|(code, _, _)| *code)
}
