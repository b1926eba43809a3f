//! printf-style message interpolation
//!
//! `interpolate` substitutes positional args into a message template using
//! `%`-conversions (`%s`, `%d`, `%.2f`, `%-10r`, `%%`, ...). With no args the
//! template is returned untouched, so a literal `%` needs no escaping in plain
//! messages. A mismatch between placeholders and args is an error.

use super::error::{FormatError, Result};
use super::field_value::{float_repr, FieldValue};
use std::iter::Peekable;
use std::str::Chars;

/// Largest accepted field width or precision
const MAX_FIELD: usize = i32::MAX as usize;

/// Substitute `args` into `template`
///
/// # Examples
///
/// ```
/// use rust_log_formats::core::interpolate::interpolate;
/// use rust_log_formats::FieldValue;
///
/// let message = interpolate("%s took %.1f ms", &["query".into(), 12.345.into()]).unwrap();
/// assert_eq!(message, "query took 12.3 ms");
///
/// // No args: markers are left alone
/// assert_eq!(interpolate("100% %s", &[]).unwrap(), "100% %s");
/// ```
pub fn interpolate(template: &str, args: &[FieldValue]) -> Result<String> {
    if args.is_empty() {
        return Ok(template.to_string());
    }
    Interpolator {
        template,
        chars: template.chars().peekable(),
        args: args.iter(),
    }
    .run()
}

#[derive(Debug, Default, Clone, Copy)]
struct ConversionSpec {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alternate: bool,
    width: usize,
    precision: Option<usize>,
}

struct Interpolator<'a> {
    template: &'a str,
    chars: Peekable<Chars<'a>>,
    args: std::slice::Iter<'a, FieldValue>,
}

impl<'a> Interpolator<'a> {
    fn run(mut self) -> Result<String> {
        let mut out = String::with_capacity(self.template.len() + 16);

        while let Some(c) = self.chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            let spec = self.parse_spec()?;
            let conversion = self
                .chars
                .next()
                .ok_or_else(|| self.error("incomplete format"))?;
            if conversion == '%' {
                out.push('%');
                continue;
            }
            let arg = self.next_arg()?;
            out.push_str(&self.convert(conversion, arg, &spec)?);
        }

        if self.args.next().is_some() {
            return Err(self.error("not all arguments converted during string formatting"));
        }
        Ok(out)
    }

    fn error(&self, message: impl Into<String>) -> FormatError {
        FormatError::interpolation(self.template, message)
    }

    fn next_arg(&mut self) -> Result<&'a FieldValue> {
        self.args
            .next()
            .ok_or_else(|| self.error("not enough arguments for format string"))
    }

    fn parse_spec(&mut self) -> Result<ConversionSpec> {
        let mut spec = ConversionSpec::default();

        while let Some(&c) = self.chars.peek() {
            match c {
                '-' => spec.left = true,
                '+' => spec.plus = true,
                ' ' => spec.space = true,
                '0' => spec.zero = true,
                '#' => spec.alternate = true,
                _ => break,
            }
            self.chars.next();
        }

        if self.chars.peek() == Some(&'*') {
            self.chars.next();
            let width = self.star_arg()?;
            if width < 0 {
                spec.left = true;
            }
            spec.width = self.bounded(width.unsigned_abs(), "width too big")?;
        } else {
            spec.width = self.digits("width too big")?;
        }

        if self.chars.peek() == Some(&'.') {
            self.chars.next();
            if self.chars.peek() == Some(&'*') {
                self.chars.next();
                let precision = self.star_arg()?.max(0).unsigned_abs();
                spec.precision = Some(self.bounded(precision, "precision too big")?);
            } else {
                spec.precision = Some(self.digits("precision too big")?);
            }
        }

        while matches!(self.chars.peek(), Some('h' | 'l' | 'L')) {
            self.chars.next();
        }
        Ok(spec)
    }

    fn digits(&mut self, too_big: &str) -> Result<usize> {
        let mut value = 0u64;
        while let Some(digit) = self.chars.peek().and_then(|c| c.to_digit(10)) {
            value = value.saturating_mul(10).saturating_add(u64::from(digit));
            self.chars.next();
        }
        self.bounded(value, too_big)
    }

    fn bounded(&self, value: u64, too_big: &str) -> Result<usize> {
        match usize::try_from(value) {
            Ok(value) if value <= MAX_FIELD => Ok(value),
            _ => Err(self.error(too_big)),
        }
    }

    fn star_arg(&mut self) -> Result<i64> {
        match self.next_arg()? {
            FieldValue::Int(i) => Ok(*i),
            FieldValue::Bool(b) => Ok(*b as i64),
            _ => Err(self.error("* wants int")),
        }
    }

    fn convert(&self, conversion: char, arg: &FieldValue, spec: &ConversionSpec) -> Result<String> {
        match conversion {
            's' => Ok(pad_text(&arg.to_string(), spec)),
            'r' => Ok(pad_text(&arg.repr(), spec)),
            'a' => Ok(pad_text(&ascii_escape(&arg.repr()), spec)),
            'd' | 'i' | 'u' => {
                let (negative, digits) = self.decimal_of(conversion, arg)?;
                Ok(format_digits(negative, digits, "", spec))
            }
            'o' | 'x' | 'X' => {
                let value = self.integer_of(conversion, arg, false)?;
                let radix = if conversion == 'o' { 8 } else { 16 };
                Ok(format_integer(value, radix, conversion == 'X', spec))
            }
            'e' | 'E' | 'f' | 'F' | 'g' | 'G' => {
                let value = self.float_of(conversion, arg)?;
                Ok(format_float(value, conversion, spec))
            }
            'c' => {
                let c = self.char_of(arg)?;
                Ok(pad_text(&c.to_string(), spec))
            }
            other => Err(self.error(format!(
                "unsupported format character '{}' (0x{:x})",
                other, other as u32
            ))),
        }
    }

    /// Sign and exact decimal digits of the integral part
    fn decimal_of(&self, conversion: char, arg: &FieldValue) -> Result<(bool, String)> {
        match arg {
            FieldValue::Float(f) if f.is_finite() => {
                let whole = f.trunc();
                Ok((whole < 0.0, format!("{:.0}", whole.abs())))
            }
            _ => {
                let value = self.integer_of(conversion, arg, true)?;
                Ok((value < 0, value.unsigned_abs().to_string()))
            }
        }
    }

    fn integer_of(&self, conversion: char, arg: &FieldValue, accept_float: bool) -> Result<i128> {
        match arg {
            FieldValue::Int(i) => Ok(*i as i128),
            FieldValue::Bool(b) => Ok(*b as i128),
            FieldValue::Float(f) if accept_float => Err(self.error(format!(
                "cannot convert float {} to integer",
                float_repr(*f)
            ))),
            other if accept_float => Err(self.error(format!(
                "%{} format: a real number is required, not {}",
                conversion,
                other.type_name()
            ))),
            other => Err(self.error(format!(
                "%{} format: an integer is required, not {}",
                conversion,
                other.type_name()
            ))),
        }
    }

    fn float_of(&self, conversion: char, arg: &FieldValue) -> Result<f64> {
        match arg {
            FieldValue::Float(f) => Ok(*f),
            FieldValue::Int(i) => Ok(*i as f64),
            FieldValue::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            other => Err(self.error(format!(
                "%{} format: must be real number, not {}",
                conversion,
                other.type_name()
            ))),
        }
    }

    fn char_of(&self, arg: &FieldValue) -> Result<char> {
        match arg {
            FieldValue::Int(i) => u32::try_from(*i)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| self.error("%c arg not in range(0x110000)")),
            FieldValue::String(s) if s.chars().count() == 1 => {
                s.chars().next().ok_or_else(|| self.error("%c requires int or char"))
            }
            _ => Err(self.error("%c requires int or char")),
        }
    }
}

fn pad_text(text: &str, spec: &ConversionSpec) -> String {
    let text: String = match spec.precision {
        Some(precision) => text.chars().take(precision).collect(),
        None => text.to_string(),
    };
    let len = text.chars().count();
    if len >= spec.width {
        return text;
    }
    let fill = " ".repeat(spec.width - len);
    if spec.left {
        text + &fill
    } else {
        fill + &text
    }
}

fn sign_of(negative: bool, spec: &ConversionSpec) -> &'static str {
    if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    }
}

fn pad_numeric(sign: &str, prefix: &str, body: &str, spec: &ConversionSpec) -> String {
    let len = sign.len() + prefix.len() + body.chars().count();
    if len >= spec.width {
        return format!("{}{}{}", sign, prefix, body);
    }
    let fill = spec.width - len;
    if spec.left {
        format!("{}{}{}{}", sign, prefix, body, " ".repeat(fill))
    } else if spec.zero {
        format!("{}{}{}{}", sign, prefix, "0".repeat(fill), body)
    } else {
        format!("{}{}{}{}", " ".repeat(fill), sign, prefix, body)
    }
}

fn format_integer(value: i128, radix: u32, upper: bool, spec: &ConversionSpec) -> String {
    let magnitude = value.unsigned_abs();
    let digits = match (radix, upper) {
        (8, _) => format!("{:o}", magnitude),
        (16, false) => format!("{:x}", magnitude),
        (16, true) => format!("{:X}", magnitude),
        _ => magnitude.to_string(),
    };
    let prefix = match (spec.alternate, radix, upper) {
        (true, 8, _) => "0o",
        (true, 16, false) => "0x",
        (true, 16, true) => "0X",
        _ => "",
    };
    format_digits(value < 0, digits, prefix, spec)
}

fn format_digits(negative: bool, mut digits: String, prefix: &str, spec: &ConversionSpec) -> String {
    if let Some(precision) = spec.precision {
        if digits.len() < precision {
            digits = "0".repeat(precision - digits.len()) + &digits;
        }
    }
    pad_numeric(sign_of(negative, spec), prefix, &digits, spec)
}

fn format_float(value: f64, conversion: char, spec: &ConversionSpec) -> String {
    let upper = conversion.is_ascii_uppercase();
    let sign = sign_of(value.is_sign_negative() && !value.is_nan(), spec);

    if !value.is_finite() {
        let body = match (value.is_nan(), upper) {
            (true, false) => "nan",
            (true, true) => "NAN",
            (false, false) => "inf",
            (false, true) => "INF",
        };
        // Zero padding never applies to inf/nan
        let spec = ConversionSpec { zero: false, ..*spec };
        return pad_numeric(sign, "", body, &spec);
    }

    let magnitude = value.abs();
    let precision = spec.precision.unwrap_or(6);
    let body = match conversion.to_ascii_lowercase() {
        'f' => fixed(magnitude, precision, spec.alternate),
        'e' => exponential(magnitude, precision, spec.alternate),
        _ => general(magnitude, precision, spec.alternate),
    };
    let body = if upper { body.to_uppercase() } else { body };
    pad_numeric(sign, "", &body, spec)
}

fn fixed(magnitude: f64, precision: usize, alternate: bool) -> String {
    let mut body = format!("{:.*}", precision, magnitude);
    if alternate && precision == 0 {
        body.push('.');
    }
    body
}

fn exponential(magnitude: f64, precision: usize, alternate: bool) -> String {
    let raw = format!("{:.*e}", precision, magnitude);
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let dot = if alternate && precision == 0 { "." } else { "" };
    format!(
        "{}{}e{}{:02}",
        mantissa,
        dot,
        if exponent < 0 { '-' } else { '+' },
        exponent.abs()
    )
}

fn general(magnitude: f64, precision: usize, alternate: bool) -> String {
    let precision = precision.max(1);
    let exponent = if magnitude == 0.0 {
        0
    } else {
        let raw = format!("{:.*e}", precision - 1, magnitude);
        raw.split_once('e')
            .and_then(|(_, exp)| exp.parse::<i32>().ok())
            .unwrap_or(0)
    };

    let body = if (-4..precision as i32).contains(&exponent) {
        fixed(magnitude, (precision as i32 - 1 - exponent) as usize, alternate)
    } else {
        exponential(magnitude, precision - 1, alternate)
    };
    if alternate {
        return body;
    }
    strip_fraction_zeros(&body)
}

fn strip_fraction_zeros(body: &str) -> String {
    let (number, exponent) = match body.find('e') {
        Some(index) => body.split_at(index),
        None => (body, ""),
    };
    let number = if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    };
    format!("{}{}", number, exponent)
}

fn ascii_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c as u32 {
            0..=0x7f => out.push(c),
            code @ 0x80..=0xff => out.push_str(&format!("\\x{:02x}", code)),
            code @ 0x100..=0xffff => out.push_str(&format!("\\u{:04x}", code)),
            code => out.push_str(&format!("\\U{:08x}", code)),
        }
    }
    out
}
