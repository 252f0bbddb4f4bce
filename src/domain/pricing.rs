use super::money::Money;
use super::order::Fulfillment;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const TAX_RATE: Decimal = dec!(0.0825);
pub const DISCOUNT_THRESHOLD: Decimal = dec!(100.00);
pub const DISCOUNT_RATE: Decimal = dec!(0.10);
pub const DELIVERY_FEE: Decimal = dec!(10.00);

/// Discount, tax and delivery rules applied to an order subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    pub tax_rate: Decimal,
    /// The discount applies only when the subtotal is strictly above this.
    pub discount_threshold: Money,
    pub discount_rate: Decimal,
    pub delivery_fee: Money,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            tax_rate: TAX_RATE,
            discount_threshold: Money::new(DISCOUNT_THRESHOLD),
            discount_rate: DISCOUNT_RATE,
            delivery_fee: Money::new(DELIVERY_FEE),
        }
    }
}

/// The priced breakdown of one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub subtotal: Money,
    pub discount: Money,
    pub tax: Money,
    pub delivery_fee: Money,
    pub total: Money,
}

impl PricingPolicy {
    /// Prices a subtotal: discount first, then tax on the discounted figure,
    /// then the untaxed delivery fee.
    pub fn quote(&self, subtotal: Money, fulfillment: Fulfillment) -> Quote {
        let discounted = if subtotal > self.discount_threshold {
            subtotal * (Decimal::ONE - self.discount_rate)
        } else {
            subtotal
        };
        let taxed = discounted * (Decimal::ONE + self.tax_rate);
        let delivery_fee = if fulfillment.is_delivery() {
            self.delivery_fee
        } else {
            Money::ZERO
        };

        Quote {
            subtotal,
            discount: Money::new(subtotal.value() - discounted.value()),
            tax: Money::new(taxed.value() - discounted.value()),
            delivery_fee,
            total: taxed + delivery_fee,
        }
    }
}
