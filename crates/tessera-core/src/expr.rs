//! Renderable SQL expressions.
//!
//! Expressions here are rendered inline: literals are escaped and written
//! straight into the text, because DDL clauses such as `CHECK` and
//! `DEFAULT` cannot carry bound parameters. Use [`Expr::bind`] for a `?`
//! placeholder in statements that are prepared with parameters.

use crate::describable::{impl_describable, join, Describable};

/// A literal value rendered inline.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// NULL.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Integer(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
}

impl Literal {
    /// Returns the escaped SQL representation.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Null => String::from("NULL"),
            Self::Bool(true) => String::from("TRUE"),
            Self::Bool(false) => String::from("FALSE"),
            Self::Integer(n) => n.to_string(),
            // SQLite has no NaN; out-of-range literals read back as infinity.
            Self::Float(f) if f.is_nan() => String::from("NULL"),
            Self::Float(f) if f.is_infinite() && f.is_sign_positive() => String::from("9e999"),
            Self::Float(f) if f.is_infinite() => String::from("-9e999"),
            Self::Float(f) => {
                // Keep a fractional part so SQLite reads it back as REAL.
                let s = f.to_string();
                if s.contains('.') {
                    s
                } else {
                    format!("{s}.0")
                }
            }
            Self::Text(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Blob(b) => {
                let hex: String = b.iter().map(|byte| format!("{byte:02X}")).collect();
                format!("X'{hex}'")
            }
        }
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for Literal {
    fn from(value: Vec<u8>) -> Self {
        Self::Blob(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Creates a column reference.
#[must_use]
pub fn col(name: &str) -> Column {
    Column::new(name)
}

/// A column reference, optionally qualified by its table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    description: String,
}

impl Column {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: name.into(),
        }
    }

    /// Creates a `table.column` reference.
    #[must_use]
    pub fn qualified(table: &str, name: &str) -> Self {
        Self {
            description: format!("{table}.{name}"),
        }
    }

    /// The `rowid` pseudo-column.
    #[must_use]
    pub fn rowid() -> Self {
        Self::new("rowid")
    }

    /// The `*` wildcard.
    #[must_use]
    pub fn all() -> Self {
        Self::new("*")
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, other: impl Into<Expr>) -> Expr {
        Expr::from(self).eq(other)
    }

    /// Creates an inequality expression.
    #[must_use]
    pub fn not_eq(self, other: impl Into<Expr>) -> Expr {
        Expr::from(self).not_eq(other)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, other: impl Into<Expr>) -> Expr {
        Expr::from(self).lt(other)
    }

    /// Creates a less-than-or-equal expression.
    #[must_use]
    pub fn lt_eq(self, other: impl Into<Expr>) -> Expr {
        Expr::from(self).lt_eq(other)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, other: impl Into<Expr>) -> Expr {
        Expr::from(self).gt(other)
    }

    /// Creates a greater-than-or-equal expression.
    #[must_use]
    pub fn gt_eq(self, other: impl Into<Expr>) -> Expr {
        Expr::from(self).gt_eq(other)
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Expr {
        Expr::from(self).is_null()
    }

    /// Creates an IS NOT NULL expression.
    #[must_use]
    pub fn is_not_null(self) -> Expr {
        Expr::from(self).is_not_null()
    }

    /// Creates a LIKE expression.
    #[must_use]
    pub fn like(self, pattern: impl Into<Expr>) -> Expr {
        Expr::from(self).like(pattern)
    }

    /// Creates a GLOB expression.
    #[must_use]
    pub fn glob(self, pattern: impl Into<Expr>) -> Expr {
        Expr::from(self).glob(pattern)
    }

    /// Creates a BETWEEN expression.
    #[must_use]
    pub fn between(self, low: impl Into<Expr>, high: impl Into<Expr>) -> Expr {
        Expr::from(self).between(low, high)
    }

    /// Creates an IN expression.
    #[must_use]
    pub fn in_list<I>(self, values: I) -> Expr
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Expr::from(self).in_list(values)
    }
}

impl_describable!(Column);

/// How tightly an expression binds, lowest first, following SQLite's
/// operator precedence.
///
/// See <https://www.sqlite.org/lang_expr.html#operators>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Precedence {
    Or,
    And,
    Not,
    /// `=`, `<>`, `IS`, `IN`, `LIKE`, `GLOB`, `BETWEEN`.
    Equality,
    /// `<`, `<=`, `>`, `>=`.
    Comparison,
    Additive,
    Multiplicative,
    Concat,
    /// Columns, literals, function calls, parenthesised and raw SQL.
    Atom,
}

/// A renderable SQL expression.
///
/// Operators parenthesise their operands where SQLite's precedence would
/// otherwise regroup them, so the rendered text always parses back into the
/// tree that was built:
///
/// ```rust
/// use tessera_core::{col, Describable};
///
/// let expr = col("a").eq(1).or(col("b").eq(1)).and(col("c").eq(1));
/// assert_eq!(expr.description(), "(a = 1 OR b = 1) AND c = 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    description: String,
    precedence: Precedence,
}

impl Expr {
    /// Creates an expression from raw SQL.
    ///
    /// The text is treated as a single operand and never parenthesised;
    /// wrap compound raw SQL with [`Expr::paren`] before combining it.
    ///
    /// **Warning**: Only use this for SQL fragments that don't contain user input.
    #[must_use]
    pub fn raw(sql: impl Into<String>) -> Self {
        Self {
            description: sql.into(),
            precedence: Precedence::Atom,
        }
    }

    /// Creates a column reference expression.
    #[must_use]
    pub fn column(column: &Column) -> Self {
        Self::raw(column.description())
    }

    /// Creates an inline literal expression.
    #[must_use]
    pub fn literal(value: impl Into<Literal>) -> Self {
        Self::raw(value.into().to_sql())
    }

    /// Creates a `?` parameter placeholder.
    #[must_use]
    pub fn bind() -> Self {
        Self::raw("?")
    }

    /// Creates a function call, e.g. `length(name)`.
    #[must_use]
    pub fn function<I>(name: &str, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        let args = join(args.into_iter().map(Into::<Self>::into));
        Self::raw(format!("{name}({args})"))
    }

    const fn compound(description: String, precedence: Precedence) -> Self {
        Self {
            description,
            precedence,
        }
    }

    /// Renders `self` as an operand of an operator binding at `precedence`.
    /// Right-hand operands of equal precedence are grouped as well, since
    /// SQLite associates to the left.
    fn operand(&self, precedence: Precedence, right: bool) -> String {
        if self.precedence < precedence || (right && self.precedence == precedence) {
            format!("({})", self.description)
        } else {
            self.description.clone()
        }
    }

    fn binary(self, op: &str, precedence: Precedence, right: impl Into<Self>) -> Self {
        let right = right.into();
        Self::compound(
            format!(
                "{} {op} {}",
                self.operand(precedence, false),
                right.operand(precedence, true)
            ),
            precedence,
        )
    }

    fn postfix(self, op: &str) -> Self {
        Self::compound(
            format!("{} {op}", self.operand(Precedence::Equality, false)),
            Precedence::Equality,
        )
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, other: impl Into<Self>) -> Self {
        self.binary("AND", Precedence::And, other)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, other: impl Into<Self>) -> Self {
        self.binary("OR", Precedence::Or, other)
    }

    /// Wraps the expression in parentheses.
    #[must_use]
    pub fn paren(self) -> Self {
        Self::raw(format!("({})", self.description))
    }

    /// Negates the expression with NOT.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::compound(
            format!("NOT {}", self.operand(Precedence::Not, false)),
            Precedence::Not,
        )
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, other: impl Into<Self>) -> Self {
        self.binary("=", Precedence::Equality, other)
    }

    /// Creates an inequality expression.
    #[must_use]
    pub fn not_eq(self, other: impl Into<Self>) -> Self {
        self.binary("<>", Precedence::Equality, other)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, other: impl Into<Self>) -> Self {
        self.binary("<", Precedence::Comparison, other)
    }

    /// Creates a less-than-or-equal expression.
    #[must_use]
    pub fn lt_eq(self, other: impl Into<Self>) -> Self {
        self.binary("<=", Precedence::Comparison, other)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, other: impl Into<Self>) -> Self {
        self.binary(">", Precedence::Comparison, other)
    }

    /// Creates a greater-than-or-equal expression.
    #[must_use]
    pub fn gt_eq(self, other: impl Into<Self>) -> Self {
        self.binary(">=", Precedence::Comparison, other)
    }

    /// Creates an addition expression.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: impl Into<Self>) -> Self {
        self.binary("+", Precedence::Additive, other)
    }

    /// Creates a subtraction expression.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, other: impl Into<Self>) -> Self {
        self.binary("-", Precedence::Additive, other)
    }

    /// Creates a multiplication expression.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn mul(self, other: impl Into<Self>) -> Self {
        self.binary("*", Precedence::Multiplicative, other)
    }

    /// Creates a division expression.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn div(self, other: impl Into<Self>) -> Self {
        self.binary("/", Precedence::Multiplicative, other)
    }

    /// Creates a modulo expression.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn rem(self, other: impl Into<Self>) -> Self {
        self.binary("%", Precedence::Multiplicative, other)
    }

    /// Creates a string concatenation expression.
    #[must_use]
    pub fn concat(self, other: impl Into<Self>) -> Self {
        self.binary("||", Precedence::Concat, other)
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        self.postfix("IS NULL")
    }

    /// Creates an IS NOT NULL expression.
    #[must_use]
    pub fn is_not_null(self) -> Self {
        self.postfix("IS NOT NULL")
    }

    /// Creates a LIKE expression.
    #[must_use]
    pub fn like(self, pattern: impl Into<Self>) -> Self {
        self.binary("LIKE", Precedence::Equality, pattern)
    }

    /// Creates a GLOB expression.
    #[must_use]
    pub fn glob(self, pattern: impl Into<Self>) -> Self {
        self.binary("GLOB", Precedence::Equality, pattern)
    }

    /// Creates a BETWEEN expression.
    #[must_use]
    pub fn between(self, low: impl Into<Self>, high: impl Into<Self>) -> Self {
        let (low, high) = (low.into(), high.into());
        Self::compound(
            format!(
                "{} BETWEEN {} AND {}",
                self.operand(Precedence::Equality, false),
                low.operand(Precedence::Equality, true),
                high.operand(Precedence::Equality, true)
            ),
            Precedence::Equality,
        )
    }

    /// Creates an IN expression.
    #[must_use]
    pub fn in_list<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        let values = join(values.into_iter().map(Into::<Self>::into));
        Self::compound(
            format!("{} IN ({values})", self.operand(Precedence::Equality, false)),
            Precedence::Equality,
        )
    }
}

impl_describable!(Expr);

impl From<Column> for Expr {
    fn from(column: Column) -> Self {
        Self::raw(column.description)
    }
}

impl From<&Column> for Expr {
    fn from(column: &Column) -> Self {
        Self::column(column)
    }
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Self::raw(value.to_sql())
    }
}

macro_rules! expr_from_literal {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Self::literal(value)
                }
            }
        )+
    };
}

expr_from_literal!(bool, i64, i32, u32, f64, &str, String, Vec<u8>);
