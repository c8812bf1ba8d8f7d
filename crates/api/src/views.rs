//! Server-rendered HTML pages.
//!
//! Every user-supplied value goes through [`escape`] before it reaches the
//! markup.

use std::fmt::Write as _;

use caixa_core::{CashTransaction, LedgerSummary, MonthlyReport, Totals, TransactionKind};

/// Escapes text for use inside HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<nav><a href="/">Cash drawer</a> | <a href="/relatorio-mensal">Monthly report</a></nav>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

fn totals_row(label: &str, totals: &Totals) -> String {
    format!(
        "<tr><th>{label}</th><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        totals.total_entry, totals.total_exit, totals.balance
    )
}

fn kind_options(selected: TransactionKind) -> String {
    [TransactionKind::Entry, TransactionKind::Exit]
        .iter()
        .map(|kind| {
            let mark = if *kind == selected { " selected" } else { "" };
            format!(r#"<option value="{kind}"{mark}>{kind}</option>"#)
        })
        .collect()
}

fn transaction_rows(transactions: &[CashTransaction], with_actions: bool) -> String {
    let mut rows = String::new();
    for tx in transactions {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
            tx.id,
            tx.date_label(),
            tx.kind,
            tx.amount,
            escape(&tx.payment_method),
            escape(&tx.item_name),
            escape(&tx.description),
            if tx.closed { "closed" } else { "open" },
        );
        if with_actions {
            let _ = write!(
                rows,
                r#"<td><a href="/edit-transacao/{id}">edit</a>
<form method="post" action="/delete-transacao"><input type="hidden" name="id" value="{id}"><button type="submit">delete</button></form></td>"#,
                id = tx.id
            );
        }
        rows.push_str("</tr>\n");
    }
    rows
}

fn transaction_table(transactions: &[CashTransaction], with_actions: bool) -> String {
    if transactions.is_empty() {
        return "<p>No transactions.</p>\n".to_string();
    }
    let actions_header = if with_actions { "<th></th>" } else { "" };
    format!(
        "<table>\n<tr><th>ID</th><th>Date</th><th>Type</th><th>Amount</th><th>Payment</th><th>Item</th><th>Description</th><th>Status</th>{actions_header}</tr>\n{}</table>\n",
        transaction_rows(transactions, with_actions)
    )
}

/// The home page: live balance, today's transactions and the entry form.
pub fn home(summary: &LedgerSummary) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        "<h1>Cash drawer</h1>\n<p>Balance: <strong>{}</strong></p>\n",
        summary.overall.balance
    );
    body.push_str("<table>\n<tr><th></th><th>Entries</th><th>Exits</th><th>Balance</th></tr>\n");
    body.push_str(&totals_row("Open", &summary.overall));
    body.push_str(&totals_row("Today", &summary.today));
    body.push_str(&totals_row("This week", &summary.week));
    body.push_str(&totals_row("This month", &summary.month));
    body.push_str("</table>\n");

    let _ = write!(
        body,
        r#"<h2>New transaction</h2>
<form method="post" action="/add-transacao">
<select name="type">{options}</select>
<input name="amount" inputmode="decimal" placeholder="0.00" required>
<input name="payment_method" placeholder="Payment method">
<input name="item_name" placeholder="Item">
<input name="description" placeholder="Description">
<button type="submit">Add</button>
</form>
<form method="post" action="/fechar-caixa"><button type="submit">Close register</button></form>
"#,
        options = kind_options(TransactionKind::Entry)
    );

    let _ = write!(
        body,
        "<h2>Transactions on {}</h2>\n{}",
        summary.as_of.format(caixa_core::DATE_FORMAT),
        transaction_table(&summary.today_transactions, true)
    );

    page("Cash drawer", &body)
}

/// The edit form for one transaction.
pub fn edit(tx: &CashTransaction) -> String {
    let body = format!(
        r#"<h1>Edit transaction {id}</h1>
<form method="post" action="/update-transacao">
<input type="hidden" name="id" value="{id}">
<select name="type">{options}</select>
<input name="amount" inputmode="decimal" value="{amount}" required>
<input type="date" name="date" value="{date}" required>
<input name="payment_method" value="{payment_method}">
<input name="item_name" value="{item_name}">
<input name="description" value="{description}">
<button type="submit">Save</button>
</form>
"#,
        id = tx.id,
        options = kind_options(tx.kind),
        amount = tx.amount,
        date = tx.date_label(),
        payment_method = escape(&tx.payment_method),
        item_name = escape(&tx.item_name),
        description = escape(&tx.description),
    );

    page("Edit transaction", &body)
}

/// The monthly report page with its month picker.
pub fn monthly_report(report: &MonthlyReport) -> String {
    let period = report.period;
    let mut body = format!(
        r#"<h1>Monthly report {label}</h1>
<form method="get" action="/relatorio-mensal">
<input type="number" name="month" min="1" max="12" value="{month}">
<input type="number" name="year" value="{year}">
<button type="submit">Show</button>
</form>
"#,
        label = period.label(),
        month = period.month(),
        year = period.year(),
    );

    if report.is_placeholder {
        body.push_str("<p>Choose a month to see its report.</p>\n");
    }

    body.push_str("<table>\n<tr><th></th><th>Entries</th><th>Exits</th><th>Balance</th></tr>\n");
    body.push_str(&totals_row("Month", &report.totals));
    body.push_str("</table>\n");
    body.push_str(&transaction_table(&report.transactions, false));

    page(&format!("Monthly report {}", period.label()), &body)
}
