use std::rc::Rc;
use yew::prelude::*;

/// A row type the table can display.
pub trait TableRow {
    /// Raw value of the field named by a column key. Unknown keys give an
    /// empty string.
    fn field(&self, key: &str) -> String;

    /// Stable identity for keyed rendering.
    fn row_key(&self) -> String;
}

type CellRenderer<T> = Rc<dyn Fn(&str, &T, usize) -> Html>;

/// Describes one column: which field it shows, its header, and optionally
/// how to render the cell.
pub struct Column<T> {
    pub key: AttrValue,
    pub header: AttrValue,
    pub render: Option<CellRenderer<T>>,
    pub class_name: Option<AttrValue>,
}

impl<T> Column<T> {
    pub fn new(
        key: impl Into<AttrValue>,
        header: impl Into<AttrValue>,
    ) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            render: None,
            class_name: None,
        }
    }

    /// Render cells with `f(value, row, index)` instead of the raw value.
    pub fn render(mut self, f: impl Fn(&str, &T, usize) -> Html + 'static) -> Self {
        self.render = Some(Rc::new(f));
        self
    }

    pub fn class_name(mut self, class_name: impl Into<AttrValue>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    fn cell(&self, row: &T, index: usize) -> Html
    where
        T: TableRow,
    {
        let value = row.field(&self.key);
        match &self.render {
            Some(render) => render(&value, row, index),
            None => html! { {value} },
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            render: self.render.clone(),
            class_name: self.class_name.clone(),
        }
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        let same_render = match (&self.render, &other.render) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.key == other.key
            && self.header == other.header
            && self.class_name == other.class_name
            && same_render
    }
}

/// Which of the mutually exclusive body states the table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    Empty,
    Rows(usize),
}

impl TableBody {
    pub fn of(loading: bool, row_count: usize) -> Self {
        if loading {
            Self::Loading
        } else if row_count == 0 {
            Self::Empty
        } else {
            Self::Rows(row_count)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props<T>
where
    T: PartialEq,
{
    pub data: Rc<Vec<T>>,
    pub columns: Rc<Vec<Column<T>>>,
    #[prop_or(false)]
    pub loading: bool,
    #[prop_or_else(|| AttrValue::from("No data"))]
    pub empty_message: AttrValue,
    /// Notified with the clicked row and its index
    #[prop_or_default]
    pub on_row_click: Option<Callback<(T, usize)>>,
}

#[function_component]
pub fn DataTable<T>(props: &Props<T>) -> Html
where
    T: TableRow + Clone + PartialEq + 'static,
{
    let column_count = props.columns.len().max(1).to_string();

    let message_row = |message: AttrValue| {
        html! {
            <tr>
                <td
                    colspan={column_count.clone()}
                    class="px-4 py-8 text-center text-sm text-gray-500"
                >
                    {message}
                </td>
            </tr>
        }
    };

    let body = match TableBody::of(props.loading, props.data.len()) {
        TableBody::Loading => message_row(AttrValue::from("Loading…")),
        TableBody::Empty => message_row(props.empty_message.clone()),
        TableBody::Rows(_) => props
            .data
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let onclick = props.on_row_click.clone().map(|on_row_click| {
                    let row = row.clone();
                    Callback::from(move |_: MouseEvent| {
                        on_row_click.emit((row.clone(), index))
                    })
                });
                let row_class = if onclick.is_some() {
                    "cursor-pointer hover:bg-gray-50"
                } else {
                    ""
                };

                html! {
                    <tr key={row.row_key()} class={row_class} {onclick}>
                        { for props.columns.iter().map(|column| html! {
                            <td class={classes!(
                                "px-4", "py-3", "text-sm", "text-gray-700",
                                column.class_name.as_ref().map(|c| c.to_string())
                            )}>
                                {column.cell(row, index)}
                            </td>
                        }) }
                    </tr>
                }
            })
            .collect::<Html>(),
    };

    html! {
        <div class="overflow-x-auto rounded-xl border border-gray-200 \
                    bg-white shadow-sm">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        { for props.columns.iter().map(|column| html! {
                            <th
                                scope="col"
                                class={classes!(
                                    "px-4", "py-3", "text-left", "text-xs",
                                    "font-semibold", "uppercase",
                                    "tracking-wide", "text-gray-600",
                                    column.class_name.as_ref().map(|c| c.to_string())
                                )}
                            >
                                {column.header.clone()}
                            </th>
                        }) }
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100">
                    {body}
                </tbody>
            </table>
        </div>
    }
}
