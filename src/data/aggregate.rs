use super::model::SalesRecord;

// ---------------------------------------------------------------------------
// Grouped statistics
// ---------------------------------------------------------------------------
//
// Pure, order-preserving group-bys over a record slice.  No caching: every
// call re-scans its input, which is cheap at this dataset's size.  Grouping
// over an empty slice yields an empty result, never an error.

/// Mean of `automobile_sales` grouped by year, ascending.
pub fn mean_sales_by_year(records: &[SalesRecord]) -> Vec<(i32, f64)> {
    let mut years: Vec<i32> = Vec::new();
    for rec in records {
        if !years.contains(&rec.year) {
            years.push(rec.year);
        }
    }
    years.sort_unstable();

    years
        .into_iter()
        .map(|year| {
            let sales = records.iter().filter(|r| r.year == year);
            (year, mean(sales.map(|r| r.automobile_sales)))
        })
        .collect()
}

/// Sum of `automobile_sales` grouped by month, in the given category order.
/// Months absent from `records` are skipped.
pub fn sum_sales_by_month(records: &[SalesRecord], month_order: &[String]) -> Vec<(String, f64)> {
    grouped_by_category(records, month_order, |r| &r.month, |group| {
        group.iter().map(|r| r.automobile_sales).sum()
    })
}

/// Mean of `automobile_sales` grouped by vehicle type, in the given order.
pub fn mean_sales_by_vehicle_type(
    records: &[SalesRecord],
    type_order: &[String],
) -> Vec<(String, f64)> {
    grouped_by_category(records, type_order, |r| &r.vehicle_type, |group| {
        mean(group.iter().map(|r| r.automobile_sales))
    })
}

/// Sum of `advertising_expenditure` grouped by vehicle type, in the given order.
pub fn sum_ad_spend_by_vehicle_type(
    records: &[SalesRecord],
    type_order: &[String],
) -> Vec<(String, f64)> {
    grouped_by_category(records, type_order, |r| &r.vehicle_type, |group| {
        group.iter().map(|r| r.advertising_expenditure).sum()
    })
}

/// Mean of `automobile_sales` grouped by (unemployment rate, vehicle type):
/// one series per vehicle type, points in ascending rate order.
pub fn mean_sales_by_unemployment_and_type(
    records: &[SalesRecord],
    type_order: &[String],
) -> Vec<(String, Vec<(f64, f64)>)> {
    type_order
        .iter()
        .filter(|ty| records.iter().any(|r| &r.vehicle_type == *ty))
        .map(|ty| {
            let mut rates: Vec<f64> = Vec::new();
            for rec in records.iter().filter(|r| &r.vehicle_type == ty) {
                if !rates.contains(&rec.unemployment_rate) {
                    rates.push(rec.unemployment_rate);
                }
            }
            rates.sort_by(|a, b| a.total_cmp(b));

            let points = rates
                .into_iter()
                .map(|rate| {
                    let group = records
                        .iter()
                        .filter(|r| &r.vehicle_type == ty && r.unemployment_rate == rate);
                    (rate, mean(group.map(|r| r.automobile_sales)))
                })
                .collect();
            (ty.clone(), points)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// One aggregate per category, keeping the categories' given order and
/// skipping categories with no matching records.
fn grouped_by_category<K, A>(
    records: &[SalesRecord],
    order: &[String],
    key: K,
    aggregate: A,
) -> Vec<(String, f64)>
where
    K: Fn(&SalesRecord) -> &String,
    A: Fn(&[&SalesRecord]) -> f64,
{
    order
        .iter()
        .filter_map(|cat| {
            let group: Vec<&SalesRecord> = records.iter().filter(|r| key(r) == cat).collect();
            if group.is_empty() {
                return None;
            }
            Some((cat.clone(), aggregate(&group)))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(
        year: i32,
        month: &str,
        recession: bool,
        vehicle_type: &str,
        sales: f64,
        ad_spend: f64,
        unemployment: f64,
    ) -> SalesRecord {
        SalesRecord {
            year,
            month: month.to_string(),
            recession,
            vehicle_type: vehicle_type.to_string(),
            automobile_sales: sales,
            advertising_expenditure: ad_spend,
            unemployment_rate: unemployment,
        }
    }

    #[test]
    fn mean_by_year_is_ascending_and_correct() {
        let records = vec![
            rec(1982, "Jan", true, "Sports", 30.0, 1.0, 5.0),
            rec(1980, "Jan", false, "Sports", 10.0, 1.0, 4.0),
            rec(1980, "Feb", false, "SUV", 20.0, 1.0, 4.0),
        ];
        let out = mean_sales_by_year(&records);
        assert_eq!(out, vec![(1980, 15.0), (1982, 30.0)]);
    }

    #[test]
    fn mean_by_vehicle_type_matches_hand_computation() {
        // Two SUV rows with sales 10 and 20 ⇒ mean 15.
        let records = vec![
            rec(1980, "Jan", false, "SUV", 10.0, 1.0, 4.0),
            rec(1980, "Feb", false, "SUV", 20.0, 1.0, 4.0),
            rec(1980, "Jan", false, "Sports", 5.0, 1.0, 4.0),
        ];
        let order = vec!["SUV".to_string(), "Sports".to_string()];
        let out = mean_sales_by_vehicle_type(&records, &order);
        assert_eq!(
            out,
            vec![("SUV".to_string(), 15.0), ("Sports".to_string(), 5.0)]
        );
    }

    #[test]
    fn category_order_is_preserved_not_alphabetical() {
        let records = vec![
            rec(1980, "Jan", false, "Trucks", 1.0, 10.0, 4.0),
            rec(1980, "Jan", false, "Sports", 2.0, 20.0, 4.0),
        ];
        let order = vec!["Trucks".to_string(), "Sports".to_string()];
        let out = sum_ad_spend_by_vehicle_type(&records, &order);
        assert_eq!(out[0].0, "Trucks");
        assert_eq!(out[1].0, "Sports");
    }

    #[test]
    fn monthly_sums_follow_month_order_and_skip_absent() {
        let records = vec![
            rec(1980, "Jan", false, "SUV", 10.0, 1.0, 4.0),
            rec(1980, "Mar", false, "SUV", 30.0, 1.0, 4.0),
            rec(1981, "Jan", false, "SUV", 5.0, 1.0, 4.0),
        ];
        let order = vec!["Jan".to_string(), "Feb".to_string(), "Mar".to_string()];
        let out = sum_sales_by_month(&records, &order);
        assert_eq!(
            out,
            vec![("Jan".to_string(), 15.0), ("Mar".to_string(), 30.0)]
        );
    }

    #[test]
    fn unemployment_series_sorted_by_rate() {
        let records = vec![
            rec(1980, "Jan", true, "SUV", 10.0, 1.0, 6.0),
            rec(1980, "Feb", true, "SUV", 20.0, 1.0, 4.0),
            rec(1980, "Mar", true, "SUV", 40.0, 1.0, 6.0),
            rec(1980, "Jan", true, "Sports", 7.0, 1.0, 5.0),
        ];
        let order = vec!["SUV".to_string(), "Sports".to_string()];
        let out = mean_sales_by_unemployment_and_type(&records, &order);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].0, "SUV");
        assert_eq!(out[0].1, vec![(4.0, 20.0), (6.0, 25.0)]);
        assert_eq!(out[1].1, vec![(5.0, 7.0)]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let order = vec!["SUV".to_string()];
        assert!(mean_sales_by_year(&[]).is_empty());
        assert!(sum_sales_by_month(&[], &order).is_empty());
        assert!(mean_sales_by_vehicle_type(&[], &order).is_empty());
        assert!(sum_ad_spend_by_vehicle_type(&[], &order).is_empty());
        assert!(mean_sales_by_unemployment_and_type(&[], &order).is_empty());
    }
}
