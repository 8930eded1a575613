use serde::{Deserialize, Serialize};

/// Business category a cash movement belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "RH")]
    Rh,
    Achat,
    Vente,
    Compta,
    Autre,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Rh => "RH",
            Category::Achat => "Achat",
            Category::Vente => "Vente",
            Category::Compta => "Compta",
            Category::Autre => "Autre",
        }
    }
}

/// Direction of a cash movement. Amounts are stored as magnitudes; the sign
/// carries the direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Sign {
    #[serde(rename = "Entrée")]
    Inflow,
    #[serde(rename = "Sortie")]
    Outflow,
}

impl Sign {
    pub fn label(&self) -> &'static str {
        match self {
            Sign::Inflow => "Entrée",
            Sign::Outflow => "Sortie",
        }
    }
}

/// Origin of a movement record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Source {
    Odoo,
    #[serde(rename = "Entrée manuelle")]
    Manual,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Visibility {
    Public,
    #[serde(rename = "Simulation privée")]
    PrivateSimulation,
    #[serde(rename = "Tout")]
    All,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordStatus {
    #[serde(rename = "Actif")]
    Active,
    #[serde(rename = "Désactivé")]
    Deactivated,
}

/// Recurrence of a manual entry or simulation movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Frequency {
    #[serde(rename = "Une seule fois")]
    OneTime,
    #[serde(rename = "Mensuel")]
    Monthly,
    #[serde(rename = "Annuel")]
    Yearly,
    #[serde(rename = "Dates personnalisées")]
    Custom,
}

impl Frequency {
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::OneTime => "Une seule fois",
            Frequency::Monthly => "Mensuel",
            Frequency::Yearly => "Annuel",
            Frequency::Custom => "Dates personnalisées",
        }
    }
}

/// Kind of accounting document a movement references in the ERP.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReferenceType {
    #[serde(rename = "Facture de vente")]
    SaleInvoice,
    #[serde(rename = "Avoir de vente")]
    SaleCreditNote,
    #[serde(rename = "Facture d'achat")]
    PurchaseInvoice,
    #[serde(rename = "Avoir d'achat")]
    PurchaseCreditNote,
    #[serde(rename = "BL de vente")]
    SaleDeliveryNote,
    #[serde(rename = "Commande client")]
    CustomerOrder,
    #[serde(rename = "Commande Fournisseur")]
    SupplierOrder,
    #[serde(rename = "Paiement Fournisseur")]
    SupplierPayment,
    #[serde(rename = "Paiement Client")]
    CustomerPayment,
    #[serde(rename = "Ref de Paiement Client")]
    CustomerPaymentRef,
    #[serde(rename = "Ref de Paiement Fournisseur")]
    SupplierPaymentRef,
}
