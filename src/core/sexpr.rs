use lexpr::Value;

/* ============================= List notation ============================== */

/// One node of a parsed list-notation expression: a bare token or a nested
/// ordered list. Structural content is the only identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SExpr {
    Atom(String),
    List(Vec<SExpr>),
}

impl SExpr {
    #[must_use]
    pub fn atom(token: impl Into<String>) -> Self {
        Self::Atom(token.into())
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    #[must_use]
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Self::Atom(token) => Some(token),
            Self::List(_) => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[SExpr]> {
        match self {
            Self::Atom(_) => None,
            Self::List(items) => Some(items),
        }
    }
}

/// Parses one parenthesized expression.
///
/// The grammar, and the failure behavior on malformed input, are entirely
/// `lexpr`'s; this adapter only reshapes the parsed value into [`SExpr`].
pub fn parse_sexpr(content: &str) -> Result<SExpr, lexpr::parse::Error> {
    let value = lexpr::from_str(content)?;
    Ok(from_value(&value))
}

fn from_value(value: &Value) -> SExpr {
    match value {
        Value::Null => SExpr::List(Vec::new()),
        Value::Cons(cell) => {
            let mut items = Vec::new();
            let mut cur = cell;
            loop {
                items.push(from_value(cur.car()));
                match cur.cdr() {
                    Value::Cons(next) => cur = next,
                    Value::Null => break,
                    // improper tail, e.g. `(a . b)`
                    tail => {
                        items.push(from_value(tail));
                        break;
                    }
                }
            }
            SExpr::List(items)
        }
        other => match other.as_name() {
            // symbols, keywords and quoted strings keep their text
            Some(name) => SExpr::Atom(name.to_owned()),
            // numbers, booleans, chars: keep the printed token form
            None => SExpr::Atom(other.to_string()),
        },
    }
}
