//! Explanation and error texts, one function per sentence template

use crate::config::Locale;
use crate::dispatch::ValidationError;
use crate::model::Fraction;

fn times_nb(count: u32) -> &'static str {
    if count == 1 {
        "gang"
    } else {
        "ganger"
    }
}

fn times_en(count: u32) -> &'static str {
    if count == 1 {
        "time"
    } else {
        "times"
    }
}

/// One addition or multiplication column.
/// `op` is the symbol between `left` and `right`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn column(
    locale: Locale,
    label: Option<usize>,
    left: u8,
    op: char,
    right: u8,
    carry_in: u8,
    value: u8,
    carry_out: u8,
) -> String {
    let digit = value % 10;
    match locale {
        Locale::Norwegian => {
            let mut s = String::new();
            if let Some(col) = label {
                s.push_str(&format!("Kolonne {}: ", col));
            }
            s.push_str(&format!("{} {} {}", left, op, right));
            if carry_in > 0 {
                s.push_str(&format!(" + {} i mente", carry_in));
            }
            s.push_str(&format!(" = {}. Skriv {}", value, digit));
            if carry_out > 0 {
                s.push_str(&format!(" og ha {} i mente", carry_out));
            }
            s.push('.');
            s
        }
        Locale::English => {
            let mut s = String::new();
            if let Some(col) = label {
                s.push_str(&format!("Column {}: ", col));
            }
            s.push_str(&format!("{} {} {}", left, op, right));
            if carry_in > 0 {
                s.push_str(&format!(" + {} carried", carry_in));
            }
            s.push_str(&format!(" = {}. Write {}", value, digit));
            if carry_out > 0 {
                s.push_str(&format!(", carry {}", carry_out));
            }
            s.push('.');
            s
        }
    }
}

pub(crate) fn prepend_carry(locale: Locale, carry: u8) -> String {
    match locale {
        Locale::Norwegian => format!("Skriv menten {} foran.", carry),
        Locale::English => format!("Write the carried {} in front.", carry),
    }
}

pub(crate) fn answer(locale: Locale, result: &str) -> String {
    match locale {
        Locale::Norwegian => format!(" Svaret er {}.", result),
        Locale::English => format!(" The answer is {}.", result),
    }
}

pub(crate) fn subtrahend_too_large(locale: Locale) -> String {
    match locale {
        Locale::Norwegian => "Det øverste tallet må være større enn det nederste.".to_string(),
        Locale::English => "The top number must be larger than the bottom number.".to_string(),
    }
}

pub(crate) fn nothing_to_borrow(locale: Locale) -> String {
    match locale {
        Locale::Norwegian => "Intern feil: fant ikke noe siffer å låne fra.".to_string(),
        Locale::English => "Internal error: found no digit to borrow from.".to_string(),
    }
}

pub(crate) fn borrow(
    locale: Locale,
    column: usize,
    top: u8,
    bottom: u8,
    lender_column: usize,
    skipped_zeros: bool,
) -> String {
    match locale {
        Locale::Norwegian => {
            let mut s = format!(
                "Kolonne {}: {} er mindre enn {}, så vi låner 1 fra kolonne {}. Sifferet blir {}.",
                column,
                top,
                bottom,
                lender_column,
                top + 10
            );
            if skipped_zeros {
                s.push_str(" Nullene vi hopper over blir til 9.");
            }
            s
        }
        Locale::English => {
            let mut s = format!(
                "Column {}: {} is less than {}, so borrow 1 from column {}. The digit becomes {}.",
                column,
                top,
                bottom,
                lender_column,
                top + 10
            );
            if skipped_zeros {
                s.push_str(" The zeros in between become 9.");
            }
            s
        }
    }
}

pub(crate) fn subtraction_column(locale: Locale, column: usize, top: u8, bottom: u8) -> String {
    let digit = top - bottom;
    match locale {
        Locale::Norwegian => format!("Kolonne {}: {} - {} = {}.", column, top, bottom, digit),
        Locale::English => format!("Column {}: {} - {} = {}.", column, top, bottom, digit),
    }
}

pub(crate) fn new_row(locale: Locale, digit: u8, shift: usize) -> String {
    match locale {
        Locale::Norwegian => format!(
            "Ny rad for sifferet {}, flyttet {} {} mot venstre. ",
            digit,
            shift,
            if shift == 1 { "plass" } else { "plasser" }
        ),
        Locale::English => format!(
            "New row for the digit {}, shifted {} {} to the left. ",
            digit,
            shift,
            if shift == 1 { "place" } else { "places" }
        ),
    }
}

pub(crate) fn row_value(locale: Locale, row: &str) -> String {
    match locale {
        Locale::Norwegian => format!(" Raden blir {}.", row),
        Locale::English => format!(" This row is {}.", row),
    }
}

pub(crate) fn product_annotation(locale: Locale, a: &str, b: &str, product: &str) -> String {
    match locale {
        Locale::Norwegian => format!(" Altså er {} · {} = {}.", a, b, product),
        Locale::English => format!(" So {} · {} = {}.", a, b, product),
    }
}

pub(crate) fn sum_partials(locale: Locale, partials: &[String], product: &str) -> String {
    let terms = partials.join(" + ");
    match locale {
        Locale::Norwegian => format!("Legg sammen delproduktene: {} = {}.", terms, product),
        Locale::English => format!("Add the partial products: {} = {}.", terms, product),
    }
}

pub(crate) fn validation_error(locale: Locale, error: &ValidationError) -> String {
    match locale {
        Locale::English => match error {
            ValidationError::Empty => "Fill in both numbers.".to_string(),
            ValidationError::NotANumber(s) => format!("\"{}\" is not a number.", s),
            ValidationError::NotAnInteger(s) => {
                format!("Use whole numbers only. \"{}\" has decimals.", s)
            }
            ValidationError::Negative(s) => {
                format!("Use positive numbers only. \"{}\" is negative.", s)
            }
            ValidationError::DivisionByZero => divide_by_zero(locale),
            ValidationError::ZeroDenominator => "A denominator cannot be zero.".to_string(),
            ValidationError::TooLarge(s) => format!("\"{}\" is too large.", s),
            ValidationError::UnknownOperator(s) => format!("Unknown operator \"{}\".", s),
        },
        Locale::Norwegian => match error {
            ValidationError::Empty => "Fyll inn begge tallene.".to_string(),
            ValidationError::NotANumber(s) => format!("«{}» er ikke et tall.", s),
            ValidationError::NotAnInteger(s) => {
                format!("Bruk bare hele tall. «{}» har desimaler.", s)
            }
            ValidationError::Negative(s) => {
                format!("Bruk bare positive tall. «{}» er negativt.", s)
            }
            ValidationError::DivisionByZero => divide_by_zero(locale),
            ValidationError::ZeroDenominator => "Nevneren kan ikke være null.".to_string(),
            ValidationError::TooLarge(s) => format!("«{}» er for stort.", s),
            ValidationError::UnknownOperator(s) => format!("Ukjent regneart «{}».", s),
        },
    }
}

pub(crate) fn divide_by_zero(locale: Locale) -> String {
    match locale {
        Locale::Norwegian => "Du kan ikke dele på null.".to_string(),
        Locale::English => "You cannot divide by zero.".to_string(),
    }
}

pub(crate) fn division_row(
    locale: Locale,
    divisor: &str,
    current: &str,
    count: u32,
    subtracted: &str,
    remainder: &str,
    decimal: bool,
) -> String {
    match locale {
        Locale::Norwegian => format!(
            "{}{} går {} {} i {}: {} · {} = {}, {} - {} = {} i rest.",
            if decimal { "Vi henter ned en 0. " } else { "" },
            divisor,
            count,
            times_nb(count),
            current,
            count,
            divisor,
            subtracted,
            current,
            subtracted,
            remainder
        ),
        Locale::English => format!(
            "{}{} goes into {} {} {}: {} · {} = {}, {} - {} = {} left over.",
            if decimal { "Bring down a 0. " } else { "" },
            divisor,
            current,
            count,
            times_en(count),
            count,
            divisor,
            subtracted,
            current,
            subtracted,
            remainder
        ),
    }
}

pub(crate) fn decimal_point(locale: Locale) -> String {
    match locale {
        Locale::Norwegian => " Sett komma i svaret.".to_string(),
        Locale::English => " Put a decimal point in the answer.".to_string(),
    }
}

pub(crate) fn approximation(locale: Locale, places: usize, quotient: &str) -> String {
    match locale {
        Locale::Norwegian => format!(
            "Divisjonen går ikke opp, så vi stopper etter {} {}. Svaret er ≈{}.",
            places,
            if places == 1 { "desimal" } else { "desimaler" },
            quotient
        ),
        Locale::English => format!(
            "The division does not come out even, so we stop after {} {}. The answer is ≈{}.",
            places,
            if places == 1 { "decimal" } else { "decimals" },
            quotient
        ),
    }
}

pub(crate) fn fraction_compare(
    locale: Locale,
    left: Fraction,
    op: char,
    right: Fraction,
    common_denominator: i64,
) -> String {
    match locale {
        Locale::Norwegian => format!(
            "Vi regner {} {} {}. Minste felles nevner for {} og {} er {}.",
            left, op, right, left.denominator, right.denominator, common_denominator
        ),
        Locale::English => format!(
            "We work out {} {} {}. The least common denominator of {} and {} is {}.",
            left, op, right, left.denominator, right.denominator, common_denominator
        ),
    }
}

pub(crate) fn fraction_expand(
    locale: Locale,
    left: Fraction,
    expanded_left: Fraction,
    right: Fraction,
    expanded_right: Fraction,
) -> String {
    match locale {
        Locale::Norwegian => format!(
            "Utvid brøkene: {} = {} og {} = {}.",
            left, expanded_left, right, expanded_right
        ),
        Locale::English => format!(
            "Expand the fractions: {} = {} and {} = {}.",
            left, expanded_left, right, expanded_right
        ),
    }
}

pub(crate) fn fraction_combine(
    locale: Locale,
    left_numerator: i64,
    op: char,
    right_numerator: i64,
    value: Fraction,
) -> String {
    match locale {
        Locale::Norwegian => format!(
            "Regn ut tellerne: {} {} {} = {}, så vi får {}.",
            left_numerator, op, right_numerator, value.numerator, value
        ),
        Locale::English => format!(
            "Combine the numerators: {} {} {} = {}, which gives {}.",
            left_numerator, op, right_numerator, value.numerator, value
        ),
    }
}

pub(crate) fn fraction_multiply(
    locale: Locale,
    left: Fraction,
    right: Fraction,
    value: Fraction,
) -> String {
    let (n, d) = (
        left.numerator * right.numerator,
        left.denominator * right.denominator,
    );
    match locale {
        Locale::Norwegian => format!(
            "Gang teller med teller og nevner med nevner: {} · {} = {} og {} · {} = {}, så vi får {}.",
            left.numerator, right.numerator, n, left.denominator, right.denominator, d, value
        ),
        Locale::English => format!(
            "Multiply numerators and denominators: {} · {} = {} and {} · {} = {}, which gives {}.",
            left.numerator, right.numerator, n, left.denominator, right.denominator, d, value
        ),
    }
}

pub(crate) fn fraction_divide(
    locale: Locale,
    left: Fraction,
    right: Fraction,
    value: Fraction,
) -> String {
    let reciprocal = Fraction::new(right.denominator, right.numerator);
    let (n, d) = (
        left.numerator * right.denominator,
        left.denominator * right.numerator,
    );
    match locale {
        Locale::Norwegian => format!(
            "Å dele på {} er det samme som å gange med {}: {} · {} = {} og {} · {} = {}, så vi får {}.",
            right,
            reciprocal,
            left.numerator,
            right.denominator,
            n,
            left.denominator,
            right.numerator,
            d,
            value
        ),
        Locale::English => format!(
            "Dividing by {} is the same as multiplying by {}: {} · {} = {} and {} · {} = {}, which gives {}.",
            right,
            reciprocal,
            left.numerator,
            right.denominator,
            n,
            left.denominator,
            right.numerator,
            d,
            value
        ),
    }
}

pub(crate) fn fraction_reduce(locale: Locale, from: Fraction, divisor: i64, value: Fraction) -> String {
    match locale {
        Locale::Norwegian => format!("Forkort med {}: {} = {}.", divisor, from, value),
        Locale::English => format!("Reduce by {}: {} = {}.", divisor, from, value),
    }
}
