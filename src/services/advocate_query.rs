//! Turns an untrusted list query string into a [`QueryPlan`] and the SQL
//! predicate/ordering it implies.
//!
//! Nothing here rejects input. Bad paging values fall back to defaults, unknown
//! sort columns fall back to `lastName`, and unparseable experience bounds are
//! dropped. Column names only ever come from [`SortColumn`], never from the
//! request.

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    FirstName,
    #[default]
    LastName,
    City,
    Degree,
    YearsOfExperience,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::FirstName,
        SortColumn::LastName,
        SortColumn::City,
        SortColumn::Degree,
        SortColumn::YearsOfExperience,
    ];

    /// Wire name, as used in `sortBy`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortColumn::FirstName => "firstName",
            SortColumn::LastName => "lastName",
            SortColumn::City => "city",
            SortColumn::Degree => "degree",
            SortColumn::YearsOfExperience => "yearsOfExperience",
        }
    }

    fn sql_column(self) -> &'static str {
        match self {
            SortColumn::FirstName => "first_name COLLATE NOCASE",
            SortColumn::LastName => "last_name COLLATE NOCASE",
            SortColumn::City => "city COLLATE NOCASE",
            SortColumn::Degree => "degree COLLATE NOCASE",
            SortColumn::YearsOfExperience => "years_of_experience",
        }
    }

    /// Direction of the first header activation: text ascending, numbers
    /// largest first.
    pub fn first_order(self) -> SortOrder {
        match self {
            SortColumn::YearsOfExperience => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn from_wire(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == input)
    }

    pub fn parse(input: Option<&str>) -> Self {
        input.and_then(Self::from_wire).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    fn sql_keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn parse(input: Option<&str>) -> Self {
        match input {
            Some(v) if v.eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// Raw list parameters exactly as they arrived. Single-valued keys keep the
/// first occurrence; repeated keys keep every occurrence in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub degrees: Vec<String>,
    pub cities: Vec<String>,
    pub min_experience: Option<String>,
    pub max_experience: Option<String>,
    pub specialties: Vec<String>,
}

impl ListParams {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = ListParams::default();
        for (key, value) in pairs {
            let value = value.into();
            let single = match key.as_ref() {
                "page" => &mut params.page,
                "pageSize" => &mut params.page_size,
                "search" => &mut params.search,
                "sortBy" => &mut params.sort_by,
                "sortOrder" => &mut params.sort_order,
                "minExperience" => &mut params.min_experience,
                "maxExperience" => &mut params.max_experience,
                "degrees" => {
                    params.degrees.push(value);
                    continue;
                }
                "cities" => {
                    params.cities.push(value);
                    continue;
                }
                "specialties" => {
                    params.specialties.push(value);
                    continue;
                }
                _ => continue,
            };
            if single.is_none() {
                *single = Some(value);
            }
        }
        params
    }
}

/// Validated, request-scoped description of one list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub search: Option<String>,
    pub degrees: Vec<String>,
    pub cities: Vec<String>,
    pub min_experience: Option<i64>,
    pub max_experience: Option<i64>,
    pub specialties: Vec<String>,
    pub sort_by: SortColumn,
    pub sort_order: SortOrder,
    pub page: i64,
    pub page_size: i64,
}

impl Default for QueryPlan {
    fn default() -> Self {
        Self {
            search: None,
            degrees: Vec::new(),
            cities: Vec::new(),
            min_experience: None,
            max_experience: None,
            specialties: Vec::new(),
            sort_by: SortColumn::default(),
            sort_order: SortOrder::default(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryPlan {
    pub fn from_params(params: &ListParams) -> Self {
        let page = parse_leading_int(params.page.as_deref())
            .unwrap_or(DEFAULT_PAGE)
            .max(1);
        let page_size = parse_leading_int(params.page_size.as_deref())
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        // Whitespace is part of the term: " Clark" only matches a full name.
        let search = params.search.clone().filter(|s| !s.is_empty());

        Self {
            search,
            degrees: non_blank(&params.degrees),
            cities: non_blank(&params.cities),
            min_experience: parse_leading_int(params.min_experience.as_deref()),
            max_experience: parse_leading_int(params.max_experience.as_deref()),
            specialties: non_blank(&params.specialties),
            sort_by: SortColumn::parse(params.sort_by.as_deref()),
            sort_order: SortOrder::parse(params.sort_order.as_deref()),
            page,
            page_size,
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// All active filter clauses joined with AND. Empty when nothing filters.
    pub fn predicate(&self) -> SqlFragment {
        let mut clauses: Vec<SqlFragment> = Vec::new();

        if let Some(term) = &self.search {
            let pattern = contains_pattern(term);
            let sql = [
                "lower(first_name) LIKE lower(?) ESCAPE '\\'",
                "lower(last_name) LIKE lower(?) ESCAPE '\\'",
                "lower(first_name || ' ' || last_name) LIKE lower(?) ESCAPE '\\'",
                "lower(city) LIKE lower(?) ESCAPE '\\'",
                "lower(degree) LIKE lower(?) ESCAPE '\\'",
                SPECIALTY_CONTAINS,
            ]
            .join(" OR ");
            clauses.push(SqlFragment::with_params(
                format!("({sql})"),
                vec![SqlParam::Text(pattern); 6],
            ));
        }

        if let Some(fragment) = any_of(&self.degrees, "lower(degree) = lower(?)", str::to_string) {
            clauses.push(fragment);
        }

        if let Some(fragment) = any_of(
            &self.cities,
            "lower(city) LIKE lower(?) ESCAPE '\\'",
            contains_pattern,
        ) {
            clauses.push(fragment);
        }

        if let Some(min) = self.min_experience {
            clauses.push(SqlFragment::with_params(
                "years_of_experience >= ?",
                vec![SqlParam::Integer(min)],
            ));
        }

        if let Some(max) = self.max_experience {
            clauses.push(SqlFragment::with_params(
                "years_of_experience <= ?",
                vec![SqlParam::Integer(max)],
            ));
        }

        if let Some(fragment) = any_of(&self.specialties, SPECIALTY_CONTAINS, contains_pattern) {
            clauses.push(fragment);
        }

        clauses
            .into_iter()
            .fold(SqlFragment::default(), SqlFragment::and)
    }

    /// `ORDER BY` clause; `id` breaks ties so pages never overlap.
    pub fn order_by(&self) -> String {
        format!(
            "ORDER BY {} {}, id ASC",
            self.sort_by.sql_column(),
            self.sort_order.sql_keyword()
        )
    }
}

const SPECIALTY_CONTAINS: &str = "EXISTS (SELECT 1 FROM json_each(advocates.specialties) AS s WHERE lower(s.value) LIKE lower(?) ESCAPE '\\')";

/// A piece of SQL with its positional `?` parameters in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlFragment {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Text(String),
    Integer(i64),
}

impl SqlFragment {
    pub fn with_params(sql: impl Into<String>, params: Vec<SqlParam>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    pub fn and(mut self, other: SqlFragment) -> Self {
        if self.is_empty() {
            return other;
        }
        if !other.is_empty() {
            self.sql = format!("{} AND {}", self.sql, other.sql);
            self.params.extend(other.params);
        }
        self
    }

    pub fn where_clause(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.sql)
        }
    }
}

fn any_of(
    values: &[String],
    clause: &str,
    to_param: impl Fn(&str) -> String,
) -> Option<SqlFragment> {
    if values.is_empty() {
        return None;
    }
    let sql = vec![clause; values.len()].join(" OR ");
    let params = values
        .iter()
        .map(|v| SqlParam::Text(to_param(v)))
        .collect();
    Some(SqlFragment::with_params(format!("({sql})"), params))
}

fn non_blank(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// `%term%` with LIKE metacharacters escaped so user input matches literally.
fn contains_pattern(term: &str) -> String {
    let mut out = String::with_capacity(term.len() + 2);
    out.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('%');
    out
}

/// Leading-integer parse: optional sign, then digits; trailing junk is
/// ignored (`"12abc"` -> 12). No digits -> `None`. Saturates on overflow.
pub fn parse_leading_int(raw: Option<&str>) -> Option<i64> {
    let s = raw?.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = &digits[..digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len())];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}
