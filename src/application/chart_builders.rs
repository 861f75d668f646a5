// Chart builders - pure functions from (dataset, dropdown value) to a chart description
use crate::application::aggregator::aggregate;
use crate::domain::chart::{Axis, ChartDescription, ChartKind, ColorEncoding, Geometry, Point, Region, Series};
use crate::domain::regions::region_code;
use crate::domain::viewership::{AggregateRow, Dataset, Dimension, Filter, Measure, Record};

/// Signature shared by every builder so they can sit in one dispatch table
pub type ChartBuilder = fn(&Dataset, Option<&str>) -> ChartDescription;

const CHOROPLETH_SCALE: &str = "Plasma";

/// One point per record, x=Country, y=Views
pub fn scatter(dataset: &Dataset, sport: Option<&str>) -> ChartDescription {
    let filter = sport.map(|s| Filter::new(Dimension::Sports, s));
    let points = matching(dataset, filter.as_ref())
        .map(|r| Point::category(r.country.clone(), r.views).with_hover(r.country.clone()))
        .collect();

    let title = match sport {
        Some(sport) => format!("Viewership for {} in Every Country", sport),
        None => "Viewership per country in every sporting event".to_string(),
    };

    ChartDescription {
        kind: ChartKind::Scatter,
        title,
        x: Axis::new(Dimension::Country.column()),
        y: Axis::new(Measure::Views.column()),
        color: None,
        filter,
        geometry: Geometry::Series(vec![Series::new(None, points)]),
    }
}

/// Grouped bars of summed Views colored by Gender.
/// With a sport selected the bars are per country, otherwise per sport.
pub fn bar(dataset: &Dataset, sport: Option<&str>) -> ChartDescription {
    let (filter, x, title) = match sport {
        Some(sport) => (
            Some(Filter::new(Dimension::Sports, sport)),
            Dimension::Country,
            format!("Viewership for {} in Every Country", sport),
        ),
        None => (None, Dimension::Sports, "Viewership by sport".to_string()),
    };

    views_by_gender(ChartKind::Bar, dataset, filter, x, title)
}

/// Views summed into category bins colored by Gender.
/// With a country selected the bins are sports, otherwise countries.
pub fn histogram(dataset: &Dataset, country: Option<&str>) -> ChartDescription {
    let (filter, x, title) = match country {
        Some(country) => (
            Some(Filter::new(Dimension::Country, country)),
            Dimension::Sports,
            format!("Viewership by Gender in every sporting event in {}", country),
        ),
        None => (
            None,
            Dimension::Country,
            "Viewership by Gender in every country".to_string(),
        ),
    };

    views_by_gender(ChartKind::Histogram, dataset, filter, x, title)
}

/// Views of one sport over time, ascending by DateTime
pub fn area(dataset: &Dataset, sport: Option<&str>) -> ChartDescription {
    let filter = sport.map(|s| Filter::new(Dimension::Sports, s));
    let mut records: Vec<&Record> = matching(dataset, filter.as_ref()).collect();
    // Stable sort: rows sharing a timestamp keep file order
    records.sort_by_key(|r| r.date_time);

    let points = records
        .into_iter()
        .map(|r| Point::time(r.date_time, r.views).with_hover(r.country.clone()))
        .collect();

    let title = match sport {
        Some(sport) => format!(
            "Viewership Distribution for {} over a period of days and time",
            sport
        ),
        None => "Viewership Distribution over a period of days and time".to_string(),
    };

    ChartDescription {
        kind: ChartKind::Area,
        title,
        x: Axis::labelled("DateTime", "Date and Time"),
        y: Axis::labelled(Measure::Views.column(), "Total Viewership"),
        color: None,
        filter,
        geometry: Geometry::Series(vec![Series::new(None, points)]),
    }
}

/// Site visits per country for one sport, shaded on a world map.
/// Countries without a known region are left out.
pub fn choropleth(dataset: &Dataset, sport: Option<&str>) -> ChartDescription {
    let filter = sport.map(|s| Filter::new(Dimension::Sports, s));
    let group_by: &[Dimension] = match sport {
        Some(_) => &[Dimension::Country, Dimension::Sports],
        None => &[Dimension::Country],
    };
    let rows = aggregate(dataset, filter.as_ref(), group_by, Measure::SiteVisits);

    let regions = rows
        .into_iter()
        .filter_map(|row| {
            let name = row.key(0);
            match region_code(name) {
                Some(code) => Some(Region {
                    code: code.to_string(),
                    name: name.to_string(),
                    value: row.value,
                }),
                None => {
                    tracing::debug!("No map region for country '{}', skipping", name);
                    None
                }
            }
        })
        .collect();

    let title = match sport {
        Some(sport) => format!("Site Visits per Country for {}", sport),
        None => "Site Visits per Country".to_string(),
    };

    ChartDescription {
        kind: ChartKind::Choropleth,
        title,
        x: Axis::new(Dimension::Country.column()),
        y: Axis::new(Measure::SiteVisits.column()),
        color: Some(ColorEncoding::Continuous {
            field: Measure::SiteVisits.column().to_string(),
            scale: CHOROPLETH_SCALE.to_string(),
        }),
        filter,
        geometry: Geometry::Regions(regions),
    }
}

fn matching<'a>(dataset: &'a Dataset, filter: Option<&'a Filter>) -> impl Iterator<Item = &'a Record> + 'a {
    dataset
        .records()
        .iter()
        .filter(move |r| filter.is_none_or(|f| f.matches(r)))
}

fn views_by_gender(
    kind: ChartKind,
    dataset: &Dataset,
    filter: Option<Filter>,
    x: Dimension,
    title: String,
) -> ChartDescription {
    let rows = aggregate(dataset, filter.as_ref(), &[x, Dimension::Gender], Measure::Views);

    ChartDescription {
        kind,
        title,
        x: Axis::new(x.column()),
        y: Axis::new(Measure::Views.column()),
        color: Some(ColorEncoding::Discrete(Dimension::Gender)),
        filter,
        geometry: Geometry::Series(series_by_color(&rows)),
    }
}

/// Split `(category, color)` rows into one series per color, first-seen order
fn series_by_color(rows: &[AggregateRow]) -> Vec<Series> {
    let mut series: Vec<Series> = Vec::new();
    for row in rows {
        let color = row.key(1);
        let point = Point::category(row.key(0), row.value);
        match series.iter_mut().find(|s| s.name.as_deref() == Some(color)) {
            Some(existing) => existing.points.push(point),
            None => series.push(Series::new(Some(color.to_string()), vec![point])),
        }
    }
    series
}
