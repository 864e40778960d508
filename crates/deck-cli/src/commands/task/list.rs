use deck_core::filter::TaskFilter;
use deck_core::pipeline::TaskQuery;
use deck_core::sections::{Section, Sections};
use deck_core::sort::SortKey;
use serde::Serialize;

use super::rows::TaskRow;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::{parse_opt, parse_value};
use crate::commands::shared::source::{Listing, emit};
use crate::context::AppContext;

pub struct ListOptions<'a> {
    pub search: Option<&'a str>,
    pub status: Option<&'a str>,
    pub category: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub sort: Option<&'a str>,
    pub grouped: bool,
}

impl ListOptions<'_> {
    fn query(&self, default_sort: SortKey) -> anyhow::Result<TaskQuery> {
        let sort = match self.sort {
            Some(raw) => parse_value(raw, "sort")?,
            None => default_sort,
        };
        Ok(TaskQuery {
            filter: TaskFilter {
                search: self.search.map(str::to_string),
                status: parse_opt(self.status, "status")?,
                category_id: self.category.map(str::to_string),
                priority: parse_opt(self.priority, "priority")?,
            },
            sort,
        })
    }
}

/// One section in grouped table output.
#[derive(Serialize)]
struct GroupedRow<'a> {
    group: &'static str,
    #[serde(flatten)]
    row: &'a TaskRow,
}

pub async fn run(options: &ListOptions<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = options.query(ctx.config.general.sort_key()?)?;
    let loaded = ctx.store.load_tasks().await;
    let schedule = ctx.schedule();

    let mut tasks = query.run(&loaded.records);
    truncate(
        &mut tasks,
        effective_limit(flags.limit, ctx.config.general.default_limit),
    );

    let table = flags.format == OutputFormat::Table;
    if options.grouped {
        let sections = Sections::group(&schedule, &tasks);
        if table {
            let schedule = &schedule;
            let rows = Section::DISPLAY_ORDER
                .iter()
                .flat_map(|section| {
                    sections
                        .get(*section)
                        .iter()
                        .map(move |task| (section.title(), TaskRow::new(task, schedule)))
                })
                .collect::<Vec<_>>();
            let grouped = rows
                .iter()
                .map(|(group, row)| GroupedRow { group: *group, row })
                .collect();
            return emit(&Listing::new(&loaded, grouped), flags);
        }
        return emit(&Listing::new(&loaded, sections.non_empty()), flags);
    }

    if table {
        let rows = tasks.iter().map(|task| TaskRow::new(task, &schedule)).collect();
        emit(&Listing::new(&loaded, rows), flags)
    } else {
        emit(&Listing::new(&loaded, tasks), flags)
    }
}
