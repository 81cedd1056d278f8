//! Fixed coordinate table for the 8-plex model workbook
//!
//! Every value the baseline builder needs lives at a known cell on the
//! "UofA" (uses of assets) sheet.

/// A (sheet, cell) coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub sheet: &'static str,
    pub cell: &'static str,
}

impl CellRef {
    pub const fn new(sheet: &'static str, cell: &'static str) -> Self {
        Self { sheet, cell }
    }
}

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}!{}", self.sheet, self.cell)
    }
}

pub const SHEET: &str = "UofA";

const fn uofa(cell: &'static str) -> CellRef {
    CellRef::new(SHEET, cell)
}

// Scalar inputs
pub const PURCHASE_PRICE: CellRef = uofa("C4");
pub const BROKER_FEE: CellRef = uofa("C5");
pub const DEPOSIT_PCT: CellRef = uofa("C7");
pub const DEPOSIT_AMOUNT: CellRef = uofa("C8");
pub const CLOSING_REBATE: CellRef = uofa("C9");
pub const TOTAL_OPERATING_EXPENSES: CellRef = uofa("C32");
pub const LOAN_AMOUNT: CellRef = uofa("C36");
pub const CMHC_PREMIUM_AMOUNT: CellRef = uofa("C37");
/// Stated rate, used only when the payment schedule cannot be inverted
pub const INTEREST_RATE_FALLBACK: CellRef = uofa("E36");
pub const AMORT_YEARS: CellRef = uofa("G36");
pub const MORTGAGE_MONTHLY_PAYMENT: CellRef = uofa("H36");
pub const PREMIUM_MONTHLY_PAYMENT: CellRef = uofa("H37");

/// Outputs computed by the workbook itself, keyed by metric name
pub const OUTPUT_CELLS: [(&str, CellRef); 5] = [
    ("noi", uofa("C34")),
    ("cash_flow", uofa("I39")),
    ("cash_on_cash", uofa("I40")),
    ("dscr", uofa("I41")),
    ("cap_rate", uofa("I42")),
];

/// One unit-type row of the rent roll
#[derive(Debug, Clone, Copy)]
pub struct UnitRow {
    pub key: &'static str,
    pub label: CellRef,
    pub units: CellRef,
    pub rent: CellRef,
}

pub const UNIT_ROWS: [UnitRow; 2] = [
    UnitRow { key: "three_bed_upper", label: uofa("B12"), units: uofa("C12"), rent: uofa("D12") },
    UnitRow { key: "two_bed_lower", label: uofa("B13"), units: uofa("C13"), rent: uofa("D13") },
];

/// One ancillary income row
#[derive(Debug, Clone, Copy)]
pub struct OtherIncomeRow {
    pub key: &'static str,
    pub label: CellRef,
    pub units: CellRef,
    pub usage: CellRef,
    pub monthly_amount: CellRef,
}

pub const OTHER_INCOME_ROWS: [OtherIncomeRow; 2] = [
    OtherIncomeRow {
        key: "other_income",
        label: uofa("B17"),
        units: uofa("C17"),
        usage: uofa("D17"),
        monthly_amount: uofa("E17"),
    },
    OtherIncomeRow {
        key: "pet_income",
        label: uofa("B18"),
        units: uofa("C18"),
        usage: uofa("D18"),
        monthly_amount: uofa("E18"),
    },
];

/// One operating-expense category row
#[derive(Debug, Clone, Copy)]
pub struct ExpenseRow {
    pub key: &'static str,
    pub label: CellRef,
    pub value: CellRef,
}

pub const OPERATING_EXPENSE_ROWS: [ExpenseRow; 8] = [
    ExpenseRow { key: "property_taxes", label: uofa("B23"), value: uofa("C23") },
    ExpenseRow { key: "insurance", label: uofa("B24"), value: uofa("C24") },
    ExpenseRow { key: "utilities", label: uofa("B25"), value: uofa("C25") },
    ExpenseRow { key: "repairs_and_maintenance", label: uofa("B26"), value: uofa("C26") },
    ExpenseRow { key: "management_salary", label: uofa("B27"), value: uofa("C27") },
    ExpenseRow { key: "other_costs", label: uofa("B28"), value: uofa("C28") },
    ExpenseRow { key: "replacement_reserve", label: uofa("B29"), value: uofa("C29") },
    ExpenseRow { key: "vacancy_bad_debt", label: uofa("B30"), value: uofa("C30") },
];
