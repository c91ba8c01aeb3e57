//! Report Summary Aggregation
//!
//! Rolls shifts and tipout deltas up into per-employee-per-role payroll
//! rows plus whole-range totals. Credit tips pass through daily tip-pool
//! merging first: shifts whose role carries a tip-pool label on a date
//! have their credit tips merged with every other labelled shift that day
//! and re-split by hours, the same way pools are distributed. Tipout
//! nets are applied after pooling and are never clamped; a heavy tipout
//! day can push payroll tips negative and payroll needs to see that.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{
    DailyRolePresence, DateRange, Employee, EmployeeRoleSummary, ReportSummary, RoleHistory,
    Shift, TipoutDelta, TipoutType,
};

use crate::error::{EngineError, EngineResult};
use crate::money::{WeightedClaim, allocate_by_weight, round_money, to_decimal, to_f64};
use crate::resolver::{base_pay_on, effective_config, tip_pool_group_on};

/// Running totals for one (employee, role) pair
#[derive(Debug, Default)]
struct GroupAcc {
    hours: Decimal,
    cash_tips: Decimal,
    gross_credit_tips: Decimal,
    pooled_credit_tips: Decimal,
    liquor_sales: Decimal,
    bar_tipout: Decimal,
    host_tipout: Decimal,
    sa_tipout: Decimal,
    latest_date: Option<NaiveDate>,
    /// First shift id seen, kept for error context on failed lookups
    sample_shift_id: String,
}

impl GroupAcc {
    fn saw_date(&mut self, date: NaiveDate) {
        self.latest_date = Some(match self.latest_date {
            Some(latest) => latest.max(date),
            None => date,
        });
    }
}

/// Aggregate shifts and deltas over `range` into summary rows.
///
/// Returns one row per (employee, role) pair that worked in range, sorted
/// by employee id then role id, plus whole-range totals. Rows reconcile
/// exactly: every report total is the sum of the rounded row values.
/// Per-hour rates divide by total hours and are 0 when no hours were
/// worked; `base_pay_rate` and `tip_pool_group` are resolved for the most
/// recent shift date in range.
pub fn summarize(
    shifts: &[Shift],
    deltas: &[TipoutDelta],
    roles: &BTreeMap<String, RoleHistory>,
    employees: &BTreeMap<String, Employee>,
    range: DateRange,
) -> EngineResult<(Vec<EmployeeRoleSummary>, ReportSummary)> {
    let in_range: Vec<&Shift> = shifts.iter().filter(|s| range.contains(s.date)).collect();

    let pooled_credit = pooled_credit_by_shift(&in_range, roles)?;

    // Fold shifts, then deltas, into (employee, role) buckets
    let mut groups: BTreeMap<(String, String), GroupAcc> = BTreeMap::new();

    for shift in &in_range {
        let key = (shift.employee_id.clone(), shift.role_id.clone());
        let acc = groups.entry(key).or_default();
        acc.hours += to_decimal(shift.hours);
        acc.cash_tips += to_decimal(shift.cash_tips);
        acc.gross_credit_tips += to_decimal(shift.credit_tips);
        acc.pooled_credit_tips += pooled_credit
            .get(&shift.id)
            .copied()
            .unwrap_or_else(|| to_decimal(shift.credit_tips));
        acc.liquor_sales += to_decimal(shift.liquor_sales);
        acc.saw_date(shift.date);
        if acc.sample_shift_id.is_empty() {
            acc.sample_shift_id = shift.id.clone();
        }
    }

    for delta in deltas.iter().filter(|d| range.contains(d.date)) {
        let key = (delta.employee_id.clone(), delta.role_id.clone());
        let acc = groups.entry(key).or_default();
        let amount = to_decimal(delta.amount);
        match delta.tipout_type {
            TipoutType::Bar => acc.bar_tipout += amount,
            TipoutType::Host => acc.host_tipout += amount,
            TipoutType::Sa => acc.sa_tipout += amount,
        }
        acc.saw_date(delta.date);
        if acc.sample_shift_id.is_empty() {
            acc.sample_shift_id = delta.shift_id.clone();
        }
    }

    // Emit rows and accumulate report totals from the rounded row values,
    // so the report line reconciles against the rows cent for cent
    let mut summaries = Vec::with_capacity(groups.len());
    let mut employee_ids: BTreeSet<String> = BTreeSet::new();
    let mut total_hours = Decimal::ZERO;
    let mut total_cash = Decimal::ZERO;
    let mut total_credit = Decimal::ZERO;
    let mut total_liquor = Decimal::ZERO;
    let mut total_payroll_tips = Decimal::ZERO;
    let mut total_payroll = Decimal::ZERO;

    for ((employee_id, role_id), acc) in groups {
        let employee =
            employees
                .get(&employee_id)
                .ok_or_else(|| EngineError::UnknownEmployee {
                    shift_id: acc.sample_shift_id.clone(),
                    employee_id: employee_id.clone(),
                })?;
        let history = roles.get(&role_id).ok_or_else(|| EngineError::UnknownRole {
            shift_id: acc.sample_shift_id.clone(),
            role_id: role_id.clone(),
        })?;

        let as_of = acc.latest_date.unwrap_or(range.end);
        let base_pay_rate = to_decimal(base_pay_on(&history.role, &history.configs, as_of));
        let tip_pool_group = tip_pool_group_on(&history.configs, as_of).map(str::to_string);

        let payroll_tips =
            acc.pooled_credit_tips + acc.bar_tipout + acc.host_tipout + acc.sa_tipout;
        let payroll_total = round_money(base_pay_rate * acc.hours) + payroll_tips;

        let hours = acc.hours;
        let per_hour = |amount: Decimal| {
            if hours.is_zero() {
                0.0
            } else {
                to_f64(amount / hours)
            }
        };

        total_hours += round_money(hours);
        total_cash += round_money(acc.cash_tips);
        total_credit += round_money(acc.pooled_credit_tips);
        total_liquor += round_money(acc.liquor_sales);
        total_payroll_tips += round_money(payroll_tips);
        total_payroll += round_money(payroll_total);
        employee_ids.insert(employee_id.clone());

        summaries.push(EmployeeRoleSummary {
            employee_id,
            employee_name: employee.name.clone(),
            role_id,
            role_name: history.role.name.clone(),
            total_hours: to_f64(hours),
            total_cash_tips: to_f64(acc.cash_tips),
            total_credit_tips: to_f64(acc.pooled_credit_tips),
            total_gross_credit_tips: to_f64(acc.gross_credit_tips),
            total_liquor_sales: to_f64(acc.liquor_sales),
            total_bar_tipout: to_f64(acc.bar_tipout),
            total_host_tipout: to_f64(acc.host_tipout),
            total_sa_tipout: to_f64(acc.sa_tipout),
            cash_tips_per_hour: per_hour(acc.cash_tips),
            credit_tips_per_hour: per_hour(payroll_tips),
            total_tips_per_hour: per_hour(acc.cash_tips + payroll_tips),
            base_pay_rate: to_f64(base_pay_rate),
            total_payroll_tips: to_f64(payroll_tips),
            payroll_total: to_f64(payroll_total),
            tip_pool_group,
        });
    }

    let report_per_hour = |amount: Decimal| {
        if total_hours.is_zero() {
            0.0
        } else {
            to_f64(amount / total_hours)
        }
    };

    let report = ReportSummary {
        shift_count: in_range.len() as i64,
        employee_count: employee_ids.len() as i64,
        total_hours: to_f64(total_hours),
        total_cash_tips: to_f64(total_cash),
        total_credit_tips: to_f64(total_credit),
        total_liquor_sales: to_f64(total_liquor),
        total_payroll_tips: to_f64(total_payroll_tips),
        total_payroll: to_f64(total_payroll),
        cash_tips_per_hour: report_per_hour(total_cash),
        credit_tips_per_hour: report_per_hour(total_payroll_tips),
        total_tips_per_hour: report_per_hour(total_cash + total_payroll_tips),
    };

    Ok((summaries, report))
}

/// Merge credit tips inside daily tip-pool buckets.
///
/// Returns each pooled shift's cent-rounded share of its bucket, keyed by
/// shift id. Shifts whose role carries no tip-pool label that day are
/// absent from the map and keep their own credit tips.
fn pooled_credit_by_shift(
    shifts: &[&Shift],
    roles: &BTreeMap<String, RoleHistory>,
) -> EngineResult<BTreeMap<String, Decimal>> {
    let mut buckets: BTreeMap<(NaiveDate, String), Vec<&Shift>> = BTreeMap::new();

    for shift in shifts {
        let history = roles
            .get(&shift.role_id)
            .ok_or_else(|| EngineError::UnknownRole {
                shift_id: shift.id.clone(),
                role_id: shift.role_id.clone(),
            })?;
        if let Some(group) = tip_pool_group_on(&history.configs, shift.date) {
            buckets
                .entry((shift.date, group.to_string()))
                .or_default()
                .push(shift);
        }
    }

    let mut pooled = BTreeMap::new();
    for ((_, _), mut members) in buckets {
        members.sort_by(|a, b| a.employee_id.cmp(&b.employee_id).then_with(|| a.id.cmp(&b.id)));

        let total: Decimal = members.iter().map(|s| to_decimal(s.credit_tips)).sum();
        let claims: Vec<WeightedClaim<'_>> = members
            .iter()
            .map(|s| WeightedClaim {
                weight: to_decimal(s.hours),
                tie_key: s.employee_id.as_str(),
            })
            .collect();

        let shares = allocate_by_weight(total, &claims);
        for (member, share) in members.iter().zip(shares) {
            pooled.insert(member.id.clone(), share);
        }
    }

    Ok(pooled)
}

/// Which tipout types had a receiving role staffed, per date.
///
/// One row per date that saw at least one shift; a flag is set when any
/// shift's resolved rule for that type receives. Lets a caller tell "no
/// pool could exist" apart from "pool came to zero".
pub fn daily_presence(
    shifts: &[Shift],
    roles: &BTreeMap<String, RoleHistory>,
) -> EngineResult<Vec<DailyRolePresence>> {
    let mut by_date: BTreeMap<NaiveDate, (bool, bool, bool)> = BTreeMap::new();

    for shift in shifts {
        let history = roles
            .get(&shift.role_id)
            .ok_or_else(|| EngineError::UnknownRole {
                shift_id: shift.id.clone(),
                role_id: shift.role_id.clone(),
            })?;
        let flags = by_date.entry(shift.date).or_default();
        for tipout_type in TipoutType::ALL {
            let receives = effective_config(&history.configs, tipout_type, shift.date)
                .is_some_and(|c| c.receives_tipout);
            if receives {
                match tipout_type {
                    TipoutType::Bar => flags.0 = true,
                    TipoutType::Host => flags.1 = true,
                    TipoutType::Sa => flags.2 = true,
                }
            }
        }
    }

    Ok(by_date
        .into_iter()
        .map(|(date, (bar, host, sa))| DailyRolePresence {
            date,
            bar,
            host,
            sa,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Role, RoleConfig};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn june() -> DateRange {
        DateRange::new(date(2024, 6, 1), date(2024, 6, 30))
    }

    fn make_shift(id: &str, d: NaiveDate, emp: &str, role_id: &str, hours: f64) -> Shift {
        Shift {
            id: id.to_string(),
            date: d,
            employee_id: emp.to_string(),
            role_id: role_id.to_string(),
            hours,
            cash_tips: 0.0,
            credit_tips: 0.0,
            liquor_sales: 0.0,
        }
    }

    fn make_config(role_id: &str, tipout_type: TipoutType) -> RoleConfig {
        RoleConfig {
            id: format!("cfg_{role_id}_{tipout_type}"),
            role_id: role_id.to_string(),
            tipout_type,
            percentage_rate: 0.0,
            effective_from: date(2024, 1, 1),
            effective_to: None,
            receives_tipout: false,
            pays_tipout: false,
            distribution_group: None,
            tip_pool_group: None,
            base_pay_rate: None,
        }
    }

    fn make_history(role_id: &str, name: &str, base_pay: f64) -> (String, RoleHistory) {
        (
            role_id.to_string(),
            RoleHistory {
                role: Role {
                    id: role_id.to_string(),
                    name: name.to_string(),
                    base_pay_rate: base_pay,
                },
                configs: Vec::new(),
            },
        )
    }

    fn make_employees(entries: &[(&str, &str)]) -> BTreeMap<String, Employee> {
        entries
            .iter()
            .map(|(id, name)| {
                (
                    id.to_string(),
                    Employee {
                        id: id.to_string(),
                        name: name.to_string(),
                    },
                )
            })
            .collect()
    }

    fn make_delta(emp: &str, role_id: &str, shift_id: &str, d: NaiveDate, t: TipoutType, amount: f64) -> TipoutDelta {
        TipoutDelta {
            employee_id: emp.to_string(),
            role_id: role_id.to_string(),
            shift_id: shift_id.to_string(),
            date: d,
            tipout_type: t,
            amount,
        }
    }

    #[test]
    fn test_summary_totals_and_rates() {
        let roles = BTreeMap::from([make_history("role_server", "Server", 12.0)]);
        let employees = make_employees(&[("emp_a", "Ada")]);
        let mut s1 = make_shift("s1", date(2024, 6, 3), "emp_a", "role_server", 6.0);
        s1.cash_tips = 90.0;
        s1.credit_tips = 60.0;
        let mut s2 = make_shift("s2", date(2024, 6, 4), "emp_a", "role_server", 4.0);
        s2.cash_tips = 30.0;
        s2.credit_tips = 40.0;

        let (rows, report) =
            summarize(&[s1, s2], &[], &roles, &employees, june()).unwrap();

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.employee_name, "Ada");
        assert_eq!(row.role_name, "Server");
        assert_eq!(row.total_hours, 10.0);
        assert_eq!(row.total_cash_tips, 120.0);
        assert_eq!(row.total_credit_tips, 100.0);
        assert_eq!(row.total_gross_credit_tips, 100.0);
        assert_eq!(row.cash_tips_per_hour, 12.0);
        assert_eq!(row.credit_tips_per_hour, 10.0);
        assert_eq!(row.total_tips_per_hour, 22.0);
        // No tipouts: payroll tips equal credit tips
        assert_eq!(row.total_payroll_tips, 100.0);
        assert_eq!(row.payroll_total, 12.0 * 10.0 + 100.0);

        assert_eq!(report.shift_count, 2);
        assert_eq!(report.employee_count, 1);
        assert_eq!(report.total_payroll, row.payroll_total);
    }

    #[test]
    fn test_tipout_nets_fold_into_payroll_tips() {
        let roles = BTreeMap::from([make_history("role_server", "Server", 10.0)]);
        let employees = make_employees(&[("emp_a", "Ada")]);
        let mut shift = make_shift("s1", date(2024, 6, 3), "emp_a", "role_server", 8.0);
        shift.credit_tips = 100.0;
        let deltas = vec![
            make_delta("emp_a", "role_server", "s1", date(2024, 6, 3), TipoutType::Bar, -12.5),
            make_delta("emp_a", "role_server", "s1", date(2024, 6, 3), TipoutType::Host, -4.0),
            make_delta("emp_a", "role_server", "s1", date(2024, 6, 3), TipoutType::Sa, 2.25),
        ];

        let (rows, _) = summarize(&[shift], &deltas, &roles, &employees, june()).unwrap();

        let row = &rows[0];
        assert_eq!(row.total_bar_tipout, -12.5);
        assert_eq!(row.total_host_tipout, -4.0);
        assert_eq!(row.total_sa_tipout, 2.25);
        assert_eq!(row.total_payroll_tips, 100.0 - 12.5 - 4.0 + 2.25);
    }

    #[test]
    fn test_negative_payroll_tips_never_clamped() {
        // Slow night: tiny credit tips, bar tipout off liquor sales
        let roles = BTreeMap::from([make_history("role_server", "Server", 10.0)]);
        let employees = make_employees(&[("emp_a", "Ada")]);
        let mut shift = make_shift("s1", date(2024, 6, 3), "emp_a", "role_server", 8.0);
        shift.credit_tips = 10.0;
        let deltas = vec![make_delta(
            "emp_a",
            "role_server",
            "s1",
            date(2024, 6, 3),
            TipoutType::Bar,
            -25.0,
        )];

        let (rows, report) = summarize(&[shift], &deltas, &roles, &employees, june()).unwrap();

        let row = &rows[0];
        assert_eq!(row.total_payroll_tips, -15.0);
        assert_eq!(row.credit_tips_per_hour, -1.88);
        assert_eq!(row.payroll_total, 80.0 - 15.0);
        assert_eq!(report.total_payroll_tips, -15.0);
    }

    #[test]
    fn test_zero_hours_rates_are_zero() {
        let roles = BTreeMap::from([make_history("role_server", "Server", 10.0)]);
        let employees = make_employees(&[("emp_a", "Ada")]);
        let mut shift = make_shift("s1", date(2024, 6, 3), "emp_a", "role_server", 0.0);
        shift.cash_tips = 50.0;
        shift.credit_tips = 20.0;

        let (rows, report) = summarize(&[shift], &[], &roles, &employees, june()).unwrap();

        let row = &rows[0];
        assert_eq!(row.total_hours, 0.0);
        assert_eq!(row.cash_tips_per_hour, 0.0);
        assert_eq!(row.credit_tips_per_hour, 0.0);
        assert_eq!(row.total_tips_per_hour, 0.0);
        // Amounts themselves still flow through
        assert_eq!(row.total_payroll_tips, 20.0);
        assert_eq!(row.payroll_total, 20.0);
        assert_eq!(report.cash_tips_per_hour, 0.0);
    }

    #[test]
    fn test_tip_pool_merges_daily_credit_tips_by_hours() {
        let (id, mut history) = make_history("role_server", "Server", 10.0);
        let mut config = make_config("role_server", TipoutType::Host);
        config.tip_pool_group = Some("servers".to_string());
        history.configs.push(config);
        let roles = BTreeMap::from([(id, history)]);
        let employees = make_employees(&[("emp_a", "Ada"), ("emp_b", "Ben")]);

        // 160.00 pooled over 6h + 2h: 120.00 / 40.00
        let mut s1 = make_shift("s1", date(2024, 6, 3), "emp_a", "role_server", 6.0);
        s1.credit_tips = 100.0;
        let mut s2 = make_shift("s2", date(2024, 6, 3), "emp_b", "role_server", 2.0);
        s2.credit_tips = 60.0;

        let (rows, _) = summarize(&[s1, s2], &[], &roles, &employees, june()).unwrap();

        let ada = rows.iter().find(|r| r.employee_id == "emp_a").unwrap();
        let ben = rows.iter().find(|r| r.employee_id == "emp_b").unwrap();
        assert_eq!(ada.total_credit_tips, 120.0);
        assert_eq!(ada.total_gross_credit_tips, 100.0);
        assert_eq!(ben.total_credit_tips, 40.0);
        assert_eq!(ben.total_gross_credit_tips, 60.0);
        assert_eq!(ada.tip_pool_group.as_deref(), Some("servers"));
    }

    #[test]
    fn test_tip_pool_does_not_merge_across_days() {
        let (id, mut history) = make_history("role_server", "Server", 10.0);
        let mut config = make_config("role_server", TipoutType::Host);
        config.tip_pool_group = Some("servers".to_string());
        history.configs.push(config);
        let roles = BTreeMap::from([(id, history)]);
        let employees = make_employees(&[("emp_a", "Ada"), ("emp_b", "Ben")]);

        let mut s1 = make_shift("s1", date(2024, 6, 3), "emp_a", "role_server", 8.0);
        s1.credit_tips = 100.0;
        let mut s2 = make_shift("s2", date(2024, 6, 4), "emp_b", "role_server", 8.0);
        s2.credit_tips = 60.0;

        let (rows, _) = summarize(&[s1, s2], &[], &roles, &employees, june()).unwrap();

        // Different days: everyone keeps their own tips
        let ada = rows.iter().find(|r| r.employee_id == "emp_a").unwrap();
        let ben = rows.iter().find(|r| r.employee_id == "emp_b").unwrap();
        assert_eq!(ada.total_credit_tips, 100.0);
        assert_eq!(ben.total_credit_tips, 60.0);
    }

    #[test]
    fn test_unpooled_roles_keep_their_credit_tips() {
        let roles = BTreeMap::from([make_history("role_server", "Server", 10.0)]);
        let employees = make_employees(&[("emp_a", "Ada"), ("emp_b", "Ben")]);

        let mut s1 = make_shift("s1", date(2024, 6, 3), "emp_a", "role_server", 4.0);
        s1.credit_tips = 100.0;
        let mut s2 = make_shift("s2", date(2024, 6, 3), "emp_b", "role_server", 8.0);
        s2.credit_tips = 60.0;

        let (rows, _) = summarize(&[s1, s2], &[], &roles, &employees, june()).unwrap();

        let ada = rows.iter().find(|r| r.employee_id == "emp_a").unwrap();
        assert_eq!(ada.total_credit_tips, 100.0);
        assert_eq!(ada.tip_pool_group, None);
    }

    #[test]
    fn test_base_pay_resolved_at_most_recent_shift_date() {
        let (id, mut history) = make_history("role_server", "Server", 12.0);
        // Raise effective June 10th, carried on a config window
        let mut config = make_config("role_server", TipoutType::Host);
        config.effective_from = date(2024, 6, 10);
        config.base_pay_rate = Some(14.0);
        history.configs.push(config);
        let roles = BTreeMap::from([(id, history)]);
        let employees = make_employees(&[("emp_a", "Ada")]);

        let before = make_shift("s1", date(2024, 6, 3), "emp_a", "role_server", 5.0);
        let after = make_shift("s2", date(2024, 6, 12), "emp_a", "role_server", 5.0);

        let (rows, _) = summarize(&[before, after], &[], &roles, &employees, june()).unwrap();

        // Most recent shift (June 12) falls inside the raise window
        assert_eq!(rows[0].base_pay_rate, 14.0);
        assert_eq!(rows[0].payroll_total, 14.0 * 10.0);
    }

    #[test]
    fn test_rows_sorted_by_employee_then_role() {
        let roles = BTreeMap::from([
            make_history("role_host", "Host", 11.0),
            make_history("role_server", "Server", 12.0),
        ]);
        let employees = make_employees(&[("emp_a", "Ada"), ("emp_b", "Ben")]);
        let shifts = vec![
            make_shift("s1", date(2024, 6, 3), "emp_b", "role_server", 4.0),
            make_shift("s2", date(2024, 6, 3), "emp_a", "role_server", 4.0),
            make_shift("s3", date(2024, 6, 4), "emp_a", "role_host", 4.0),
        ];

        let (rows, report) = summarize(&shifts, &[], &roles, &employees, june()).unwrap();

        let order: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.employee_id.as_str(), r.role_id.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("emp_a", "role_host"),
                ("emp_a", "role_server"),
                ("emp_b", "role_server"),
            ]
        );
        assert_eq!(report.employee_count, 2);
        assert_eq!(report.shift_count, 3);
    }

    #[test]
    fn test_shifts_outside_range_are_ignored() {
        let roles = BTreeMap::from([make_history("role_server", "Server", 10.0)]);
        let employees = make_employees(&[("emp_a", "Ada")]);
        let inside = make_shift("s1", date(2024, 6, 3), "emp_a", "role_server", 4.0);
        let outside = make_shift("s2", date(2024, 7, 1), "emp_a", "role_server", 9.0);

        let (rows, report) = summarize(&[inside, outside], &[], &roles, &employees, june()).unwrap();

        assert_eq!(report.shift_count, 1);
        assert_eq!(rows[0].total_hours, 4.0);
    }

    #[test]
    fn test_daily_presence_reflects_receiving_roles() {
        let (server_id, mut server) = make_history("role_server", "Server", 10.0);
        let mut pays = make_config("role_server", TipoutType::Bar);
        pays.pays_tipout = true;
        server.configs.push(pays);

        let (host_id, mut host) = make_history("role_host", "Host", 10.0);
        let mut receives = make_config("role_host", TipoutType::Host);
        receives.receives_tipout = true;
        host.configs.push(receives);

        let roles = BTreeMap::from([(server_id, server), (host_id, host)]);
        let shifts = vec![
            // June 3: server plus host, so host presence only
            make_shift("s1", date(2024, 6, 3), "emp_a", "role_server", 8.0),
            make_shift("s2", date(2024, 6, 3), "emp_b", "role_host", 8.0),
            // June 4: server alone, a row with no receiving presence
            make_shift("s3", date(2024, 6, 4), "emp_a", "role_server", 8.0),
        ];

        let presence = daily_presence(&shifts, &roles).unwrap();

        assert_eq!(
            presence,
            vec![
                DailyRolePresence {
                    date: date(2024, 6, 3),
                    bar: false,
                    host: true,
                    sa: false,
                },
                DailyRolePresence {
                    date: date(2024, 6, 4),
                    bar: false,
                    host: false,
                    sa: false,
                },
            ]
        );
    }
}
