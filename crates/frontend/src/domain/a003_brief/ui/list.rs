use contracts::domain::a003_brief::aggregate::BriefSummary;
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::format_date_opt;

/// Read-only list of the briefs generated for a client.
#[component]
pub fn BriefsTable(#[prop(into)] briefs: Signal<Vec<BriefSummary>>) -> impl IntoView {
    view! {
        <Card>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h3>"Brief generati"</h3>
                <Badge>{move || briefs.with(|b| b.len()).to_string()}</Badge>
            </Flex>
            <Show
                when=move || briefs.with(|b| !b.is_empty())
                fallback=|| view! { <div class="table__empty">"Nessun brief per questo cliente."</div> }
            >
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Keyword"</TableHeaderCell>
                            <TableHeaderCell>"Mercato"</TableHeaderCell>
                            <TableHeaderCell>"Intento"</TableHeaderCell>
                            <TableHeaderCell>"Creato il"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || briefs.get()
                            key=|b| b.id.clone()
                            children=move |brief| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{brief.keyword.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{brief.market.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{brief.intent.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date_opt(brief.created_at.as_deref())}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </Show>
        </Card>
    }
}
