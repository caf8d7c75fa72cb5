//! Ruble amounts spelled out in Russian ("сумма прописью").
//!
//! Rubles are written in words, grouped into millions, thousands and ones;
//! kopecks stay a two-digit numeral. Unit words are declined by count:
//! `1 рубль`, `2 рубля`, `5 рублей`, `11 рублей`, `21 рубль`.

use vibo_core::{DomainError, DomainResult, Money};

/// Largest ruble amount that can be spelled (there is no billions group).
pub const MAX_RUBLES: u64 = 999_999_999;

const ONES_MASCULINE: [&str; 10] = [
    "", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];
const ONES_FEMININE: [&str; 10] = [
    "", "одна", "две", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];
const TEENS: [&str; 10] = [
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];
const TENS: [&str; 10] = [
    "", "", "двадцать", "тридцать", "сорок", "пятьдесят", "шестьдесят", "семьдесят",
    "восемьдесят", "девяносто",
];
const HUNDREDS: [&str; 10] = [
    "", "сто", "двести", "триста", "четыреста", "пятьсот", "шестьсот", "семьсот", "восемьсот",
    "девятьсот",
];

/// Unit word forms: nominative singular, genitive singular, genitive plural.
type Forms = [&'static str; 3];

const MILLION: Forms = ["миллион", "миллиона", "миллионов"];
const THOUSAND: Forms = ["тысяча", "тысячи", "тысяч"];
const RUBLE: Forms = ["рубль", "рубля", "рублей"];
const KOPECK: Forms = ["копейка", "копейки", "копеек"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gender {
    Masculine,
    Feminine,
}

/// Spell a decimal ruble amount, e.g. `3000.0` → `"Три тысячи рублей 00 копеек"`.
///
/// Fails with [`DomainError::InvalidAmount`] for negative or non-finite input
/// and for amounts above [`MAX_RUBLES`].
pub fn number_to_words(amount: f64) -> DomainResult<String> {
    amount_in_words(Money::from_rubles(amount)?)
}

/// Spell an amount that is already rounded to kopecks.
pub fn amount_in_words(amount: Money) -> DomainResult<String> {
    let rubles = amount.rubles();
    if rubles > MAX_RUBLES {
        return Err(DomainError::invalid_amount(format!(
            "{amount} exceeds the supported range (up to {MAX_RUBLES} rubles)"
        )));
    }

    let mut words: Vec<&'static str> = Vec::new();

    if rubles == 0 {
        words.push("ноль");
    }

    let millions = rubles / 1_000_000;
    let after_millions = rubles % 1_000_000;
    if millions > 0 {
        push_triad(&mut words, millions, Gender::Masculine);
        words.push(declension(millions, &MILLION));
    }

    let thousands = after_millions / 1_000;
    let ones = after_millions % 1_000;
    if thousands > 0 {
        push_triad(&mut words, thousands, Gender::Feminine);
        words.push(declension(thousands, &THOUSAND));
    }

    if ones > 0 {
        push_triad(&mut words, ones, Gender::Masculine);
    }

    words.push(declension(rubles, &RUBLE));

    let kopecks = amount.kopeck_part();
    let phrase = format!(
        "{} {:02} {}",
        words.join(" "),
        kopecks,
        declension(kopecks, &KOPECK)
    );
    Ok(capitalize(phrase.trim()))
}

/// Pick the unit form for `n`: 11–19 → plural, then by last digit.
fn declension(n: u64, forms: &Forms) -> &'static str {
    let last_two = n % 100;
    let last = n % 10;
    if (11..=19).contains(&last_two) {
        return forms[2];
    }
    match last {
        1 => forms[0],
        2..=4 => forms[1],
        _ => forms[2],
    }
}

/// Words for a three-digit group (0..=999). Zero yields nothing.
fn push_triad(words: &mut Vec<&'static str>, n: u64, gender: Gender) {
    let h = (n / 100 % 10) as usize;
    let t = (n % 100 / 10) as usize;
    let o = (n % 10) as usize;

    if h > 0 {
        words.push(HUNDREDS[h]);
    }

    if t == 1 {
        words.push(TEENS[o]);
        return;
    }
    if t > 1 {
        words.push(TENS[t]);
    }
    if o > 0 {
        words.push(match gender {
            Gender::Masculine => ONES_MASCULINE[o],
            Gender::Feminine => ONES_FEMININE[o],
        });
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
