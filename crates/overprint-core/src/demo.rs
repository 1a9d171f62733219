//! The demonstration driver: one `print` call per overload, in fixed order.

use std::io::Write;

use log::info;
use serde::Serialize;

use crate::category::Category;
use crate::error::Result;
use crate::printer::Printer;
use crate::value::Value;

/// Owned text passed to the `std::string` overload.
pub const OWNED_TEXT: &str = "C++ string";

/// Borrowed text passed to the `const char*` overload.
pub const BORROWED_TEXT: &str = "C-style string";

/// One printed line of the demo, in machine-readable form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub category: Category,
    pub parameter: String,
    pub label: &'static str,
    pub value: String,
    pub line: String,
}

impl From<&Value<'_>> for Record {
    fn from(value: &Value<'_>) -> Self {
        let category = value.category();
        Record {
            category,
            parameter: category.parameter().to_string(),
            label: category.label(),
            value: value.body(),
            line: value.to_string(),
        }
    }
}

/// Print every overload once, in invocation order.
#[allow(clippy::approx_constant)]
pub fn run<W: Write>(printer: &mut Printer<W>) -> Result<()> {
    let x: i32 = 10;
    let px: &i32 = &x;
    let mut y: u32 = 20;
    let mut long_value: i64 = 30;

    printer.print(x)?;
    printer.print(px)?;
    printer.print(&mut y)?;
    let cy: &u32 = &y;
    printer.print(cy)?;
    printer.print(&mut long_value)?;
    printer.print(50_i16)?;
    printer.print(3.14_f64)?;
    printer.print(true)?;
    printer.print('A')?;
    printer.print(BORROWED_TEXT)?;
    printer.print(String::from(OWNED_TEXT))?;
    printer.flush()?;

    info!("demo printed {} overloads", Category::ALL.len());
    Ok(())
}

/// The demo sequence as records, without writing anything.
#[allow(clippy::approx_constant)]
pub fn records() -> Vec<Record> {
    let x: i32 = 10;
    let mut y: u32 = 20;
    let mut long_value: i64 = 30;

    let mut records = Vec::with_capacity(Category::ALL.len());
    records.push(Record::from(&Value::from(x)));
    records.push(Record::from(&Value::from(&x)));
    records.push(Record::from(&Value::from(&mut y)));
    records.push(Record::from(&Value::from(&y)));
    records.push(Record::from(&Value::from(&mut long_value)));
    records.push(Record::from(&Value::from(50_i16)));
    records.push(Record::from(&Value::from(3.14_f64)));
    records.push(Record::from(&Value::from(true)));
    records.push(Record::from(&Value::from('A')));
    records.push(Record::from(&Value::from(BORROWED_TEXT)));
    records.push(Record::from(&Value::from(String::from(OWNED_TEXT))));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = "\
Int: 10
Const Int* : 10
Unsigned Int& : 20
Const Unsigned Int& : 20
Long* : 30
Short: 50
Double: 3.14
Bool: true
Char: A
C-string: C-style string
String: C++ string
";

    #[test]
    fn demo_prints_eleven_lines_in_order() {
        let mut printer = Printer::new(Vec::new());
        run(&mut printer).unwrap();
        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(out, EXPECTED);
        assert_eq!(out.lines().count(), 11);
    }

    #[test]
    fn records_follow_invocation_order() {
        let records = records();
        let categories: Vec<Category> = records.iter().map(|r| r.category).collect();
        assert_eq!(categories, Category::ALL);
        let lines: Vec<&str> = records.iter().map(|r| r.line.as_str()).collect();
        assert_eq!(lines, EXPECTED.lines().collect::<Vec<_>>());
    }

    #[test]
    fn records_carry_declared_parameter() {
        let records = records();
        assert_eq!(records[1].parameter, "const int*");
        assert_eq!(records[2].parameter, "unsigned int&");
        assert_eq!(records[3].value, "20");
    }
}
