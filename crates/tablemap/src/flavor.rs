/// SQL dialect used when quoting identifiers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Flavor {
    /// `[name]`
    #[default]
    SqlServer,

    /// `"name"`
    Postgresql,

    /// `"name"`
    Sqlite,

    /// `` `name` ``
    Mysql,
}

impl Flavor {
    /// Opening and closing delimiters. An embedded closing delimiter is
    /// escaped by doubling it.
    fn delimiters(self) -> (char, char) {
        match self {
            Flavor::SqlServer => ('[', ']'),
            Flavor::Postgresql | Flavor::Sqlite => ('"', '"'),
            Flavor::Mysql => ('`', '`'),
        }
    }

    pub(crate) fn write_ident(self, dst: &mut String, ident: &str) {
        let (open, close) = self.delimiters();

        dst.push(open);
        for ch in ident.chars() {
            if ch == close {
                dst.push(close);
            }
            dst.push(ch);
        }
        dst.push(close);
    }

    /// Quotes a single identifier.
    pub fn quote_ident(self, ident: &str) -> String {
        let mut dst = String::with_capacity(ident.len() + 2);
        self.write_ident(&mut dst, ident);
        dst
    }
}
