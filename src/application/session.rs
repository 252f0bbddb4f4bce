use crate::domain::catalog::Catalog;
use crate::domain::customer::{CustomerInfo, EmailAddress, PhoneNumber};
use crate::domain::money::Quantity;
use crate::domain::order::{Fulfillment, OrderItems};
use crate::domain::ports::OrderSinkBox;
use crate::domain::pricing::{PricingPolicy, Quote};
use crate::domain::record::OrderRecord;
use crate::error::{OrderError, Result};
use crate::interfaces::console::Console;
use tokio::io::{AsyncBufRead, AsyncWrite};

const INVALID_NUMBER: &str =
    "Invalid input. Please enter numeric values for product ID and quantity.";
const INVALID_PRODUCT: &str = "Invalid product ID. Please try again.";
const INVALID_FULFILLMENT: &str = "Please answer \"yes\" or \"no\".";

/// The outcome of a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedOrder {
    pub record: OrderRecord,
    pub quote: Quote,
}

/// Drives one order from customer details through to the saved record.
///
/// The session owns the catalog, the pricing rules and the sink that finished
/// orders are appended to. Every user-input error is reported on the console
/// and the same question is asked again; only closed input and I/O failures
/// end the session early.
pub struct OrderSession {
    catalog: Catalog,
    pricing: PricingPolicy,
    sink: OrderSinkBox,
}

impl OrderSession {
    /// Creates a session with the standard catalog and pricing rules.
    pub fn new(sink: OrderSinkBox) -> Self {
        Self::with_rules(Catalog::standard(), PricingPolicy::default(), sink)
    }

    pub fn with_rules(catalog: Catalog, pricing: PricingPolicy, sink: OrderSinkBox) -> Self {
        Self {
            catalog,
            pricing,
            sink,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs the whole interactive flow and appends the order to the sink.
    pub async fn run<R, W>(&self, console: &mut Console<R, W>) -> Result<CompletedOrder>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let customer = self.capture_customer(console).await?;
        self.display_catalog(console).await?;
        let items = self.collect_items(console).await?;
        let fulfillment = self.choose_fulfillment(console).await?;

        let quote = self.price(&items, fulfillment)?;
        console.say("").await?;
        console
            .say(&format!("Final Order Amount: {}", quote.total))
            .await?;

        let record = OrderRecord::new(customer, &items, &self.catalog, quote.total, fulfillment)?;
        self.sink.append(&record).await?;
        console
            .say("Order saved. Thank you for your purchase!")
            .await?;

        Ok(CompletedOrder { record, quote })
    }

    /// Asks for name, phone and email, re-asking a field until it validates.
    pub async fn capture_customer<R, W>(&self, console: &mut Console<R, W>) -> Result<CustomerInfo>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let name = console.ask("Enter customer name: ").await?;

        let phone = loop {
            let answer = console.ask("Enter phone number (10 digits): ").await?;
            match PhoneNumber::parse(&answer) {
                Ok(phone) => break phone,
                Err(e) => Self::reject(console, "phone", e).await?,
            }
        };

        let email = loop {
            let answer = console.ask("Enter email address: ").await?;
            match EmailAddress::parse(&answer) {
                Ok(email) => break email,
                Err(e) => Self::reject(console, "email", e).await?,
            }
        };

        Ok(CustomerInfo::new(name, phone, email))
    }

    pub async fn display_catalog<R, W>(&self, console: &mut Console<R, W>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        console.say("\nAvailable Products:").await?;
        for product in self.catalog.products() {
            console.say(&product.to_string()).await?;
        }
        Ok(())
    }

    /// Reads product/quantity pairs until the user enters product ID 0.
    pub async fn collect_items<R, W>(&self, console: &mut Console<R, W>) -> Result<OrderItems>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut items = OrderItems::new();
        loop {
            let answer = console
                .ask("Enter product ID to purchase (or 0 to finish): ")
                .await?;
            let Ok(raw_id) = answer.trim().parse::<i64>() else {
                Self::warn(console, "product_id", INVALID_NUMBER).await?;
                continue;
            };
            if raw_id == 0 {
                break;
            }
            let Some(product) = self.catalog.lookup(raw_id) else {
                Self::warn(console, "product_id", INVALID_PRODUCT).await?;
                continue;
            };

            let answer = console.ask("Enter quantity: ").await?;
            let Ok(raw_quantity) = answer.trim().parse::<i64>() else {
                Self::warn(console, "quantity", INVALID_NUMBER).await?;
                continue;
            };
            let added = Quantity::try_from(raw_quantity)
                .and_then(|quantity| items.add(product.id, quantity));
            match added {
                Ok(running) => {
                    tracing::debug!(product_id = product.id, quantity = %running, "Item added");
                }
                Err(e) => Self::reject(console, "quantity", e).await?,
            }
        }
        Ok(items)
    }

    /// Asks delivery (yes) or pickup (no) until one of the two is given.
    pub async fn choose_fulfillment<R, W>(&self, console: &mut Console<R, W>) -> Result<Fulfillment>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        loop {
            let answer = console
                .ask("Choose delivery (yes) or pickup (no): ")
                .await?;
            match Fulfillment::from_answer(&answer) {
                Some(choice) => return Ok(choice),
                None => Self::warn(console, "fulfillment", INVALID_FULFILLMENT).await?,
            }
        }
    }

    pub fn price(&self, items: &OrderItems, fulfillment: Fulfillment) -> Result<Quote> {
        let subtotal = items.subtotal(&self.catalog)?;
        let quote = self.pricing.quote(subtotal, fulfillment);
        tracing::debug!(?quote, "Order priced");
        Ok(quote)
    }

    async fn reject<R, W>(console: &mut Console<R, W>, field: &str, error: OrderError) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        match error {
            OrderError::ValidationError(message) => Self::warn(console, field, &message).await,
            other => Err(other),
        }
    }

    async fn warn<R, W>(console: &mut Console<R, W>, field: &str, message: &str) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::warn!(field, "Rejected input");
        console.say(message).await
    }
}
