// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Language;

macro_rules! texts {
    ($($key:ident => $ko:literal, $en:literal;)*) => {
        /// Every user-facing label, in Korean and English.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Text {
            $($key),*
        }

        impl Text {
            pub fn tr(self, lang: Language) -> &'static str {
                match (self, lang) {
                    $(
                        (Text::$key, Language::Ko) => $ko,
                        (Text::$key, Language::En) => $en,
                    )*
                }
            }
        }
    };
}

texts! {
    Dashboard => "대시보드", "Dashboard";
    Transactions => "거래내역", "Transactions";
    Budgets => "예산", "Budgets";
    Analytics => "분석", "Analytics";
    Settings => "설정", "Settings";
    Categories => "카테고리", "Categories";

    TotalIncome => "총 수입", "Total Income";
    TotalExpense => "총 지출", "Total Expense";
    Balance => "잔액", "Balance";
    RecentTransactions => "최근 거래", "Recent Transactions";
    NoTransactions => "거래 내역이 없습니다", "No transactions yet";

    Id => "ID", "ID";
    Date => "날짜", "Date";
    Type => "유형", "Type";
    Amount => "금액", "Amount";
    Original => "원금액", "Original";
    Currency => "화폐", "Currency";
    Category => "카테고리", "Category";
    Tags => "태그", "Tags";
    Memo => "메모", "Memo";
    Income => "수입", "Income";
    Expense => "지출", "Expense";
    Name => "이름", "Name";
    Color => "색상", "Color";

    DateRequired => "날짜를 입력해주세요", "Date is required";
    TypeRequired => "유형을 선택해주세요", "Type is required";
    AmountRequired => "금액을 입력해주세요", "Amount is required";
    CategoryRequired => "카테고리를 선택해주세요", "Category is required";
    NameRequired => "이름을 입력해주세요", "Name is required";
    ColorRequired => "색상을 입력해주세요", "Color is required";
    DateRangeRequired => "기간을 선택해주세요", "Please select date range";
    InvalidDate => "날짜 형식이 올바르지 않습니다 (YYYY-MM-DD)", "Invalid date, expected YYYY-MM-DD";
    InvalidMonth => "월 형식이 올바르지 않습니다 (YYYY-MM)", "Invalid month, expected YYYY-MM";
    InvalidType => "유형은 수입 또는 지출이어야 합니다", "Type must be income or expense";
    InvalidNumber => "숫자 형식이 올바르지 않습니다", "Invalid number";
    AmountPositive => "금액은 0보다 커야 합니다", "Amount must be greater than 0";
    CurrencyLength => "화폐 코드는 3자리여야 합니다", "Currency must be 3 characters";
    RateRange => "환율은 0.01에서 10000 사이여야 합니다", "Conversion rate must be between 0.01 and 10000";
    YearTooEarly => "연도는 2000년 이후여야 합니다", "Year must be 2000 or later";
    ThresholdRange => "알림 기준은 1에서 100 사이여야 합니다", "Alert threshold must be between 1 and 100";
    InvalidColor => "색상은 #RRGGBB 형식이어야 합니다", "Color must be #RRGGBB";
    EndBeforeStart => "종료일은 시작일보다 빠를 수 없습니다", "End date must not be before start date";

    NoBudgets => "예산이 설정되지 않았습니다", "No budgets set";
    Budget => "예산", "Budget";
    Spent => "사용", "Spent";
    Remaining => "남은 금액", "Remaining";
    Period => "기간", "Period";
    Progress => "진행률", "Progress";
    AlertAt => "알림", "Alert at";
    Status => "상태", "Status";
    Safe => "안전", "Safe";
    ApproachingLimit => "한도 근접", "Approaching Limit";
    OverBudget => "예산 초과", "Over Budget";
    AllCategories => "전체", "All";

    TopIncome => "최고 수입", "Top Income";
    TopExpense => "최고 지출", "Top Expense";
    NoIncomeThisMonth => "이번 달 수입이 없습니다", "No income this month";
    NoExpensesThisMonth => "이번 달 지출 내역이 없습니다", "No expenses this month";
    CategoryBreakdown => "카테고리별 분석", "Category Breakdown";
    ExpenseByTag => "태그별 지출", "Expense by Tag";
    MonthlyTrend => "월별 추이", "Monthly Trend";
    DailyCalendar => "일별 내역", "Daily Calendar";
    Month => "월", "Month";
    Share => "비율", "Share";
    NoDataAvailable => "데이터가 없습니다", "No data available";
    NoCategories => "카테고리가 없습니다", "No categories";
    NoTags => "태그가 없습니다", "No tags";

    Appearance => "외관", "Appearance";
    Language => "언어", "Language";
    Preferences => "환경설정", "Preferences";

    Exported => "내보내기 완료", "Exported";
    Saved => "저장되었습니다", "Saved";
    Deleted => "삭제되었습니다", "Deleted";
    Cancelled => "취소되었습니다", "Cancelled";

    DeleteTransactionConfirm => "이 거래를 삭제하시겠습니까?", "Are you sure you want to delete this transaction?";
    DeleteBudgetConfirm => "이 예산을 삭제하시겠습니까?", "Are you sure you want to delete this budget?";
    DeleteTagConfirm => "이 태그를 삭제하시겠습니까?", "Are you sure you want to delete this tag?";
    DeleteCategoryConfirm => "이 카테고리를 삭제하시겠습니까?", "Are you sure you want to delete this category?";
}
