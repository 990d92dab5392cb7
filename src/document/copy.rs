//! Fixed German wording used in every proposal. Wording changes here are
//! customer-visible and should be reviewed as such.

pub const SENDER_LINE: &str =
    "ExposeProfi.de | EPCS GmbH | Bruder-Klaus-Straße 3a | 78467 Konstanz";

pub const COUNTRY_LINE: &str = "Deutschland";

pub const OFFER_NUMBER_LABEL: &str = "Angebot Nr. ";

pub const INTRO: &str =
    "Vielen Dank für Ihre Anfrage und Ihr damit verbundenes Interesse an einer Zusammenarbeit.";

pub const BENEFITS_TITLE: &str = "Die Vorteile zusammengefasst, die Sie erwarten können:";

pub const BENEFITS: [(&str, &str); 5] = [
    (
        "Fotorealismus:",
        "Wir erstellen ausschließlich emotionale 3D-Visualisierungen der höchsten Qualitätsstufe.",
    ),
    (
        "Persönliche & individuelle Betreuung:",
        "Sie erhalten bei jedem Projekt die Unterstützung von einem persönlichen Ansprechpartner, der die Visualisierungen individuell für Sie erstellt und immer per Telefon oder Email erreichbar ist.",
    ),
    (
        "Effiziente Prozesse & Schnelle Lieferzeit:",
        "Wie Sie sehen, melden wir uns innerhalb von 24h mit einem Angebot bei Ihnen. Ihr Projekt verläuft ab Start ebenso reibungslos und Sie erhalten die Visualisierungen schnellstmöglich. Gänzlich ohne Kopfschmerzen.",
    ),
    (
        "Korrekturschleifen:",
        "Bei 50% unserer Projekte benötigen unsere Kunden keine einzige Korrekturschleife, da wir von vorneherein ihre Wünsche perfekt umsetzen. Falls Sie dennoch Änderungswünsche haben sollten, bieten wir Ihnen ein eigenes Tool, bei dem Sie bequem innerhalb der Visualisierungen an die entsprechenden Stellen klicken und kommentieren können, was Sie geändert haben möchten. Hieraus ergibt sich für Sie eine Zeitersparnis verglichen mit Änderungswünschen per Email oder Telefon. Zudem gibt es durch unser Tool keine Missverständnisse bei der Umsetzung, wodurch Sie die finalen Visualisierungen noch schneller erhalten und das Projekt ganz reibungslos und stressfrei verläuft.",
    ),
    (
        "Preiswert:",
        "Aufgrund unserer effizienten Prozesse bieten wir günstigere Preise als andere Anbieter mit vergleichbar hoher Qualität und zugleich eine bessere Betreuung.",
    ),
];

pub const SERVICES_INTRO: &str =
    "Basierend auf den zugesandten Unterlagen unterbreiten wir Ihnen folgendes Angebot:";

pub const TABLE_HEADERS: [&str; 4] = ["Anzahl", "Bezeichnung", "Beschreibung", "Stückpreis netto"];

pub const NO_SERVICES_PLACEHOLDER: &str = "Keine Leistungen ausgewählt";

pub const PRICE_TIERS_LABEL: &str = "Preisstaffelung:";

pub const SUMMARY_TITLE: &str = "Zusammenfassung:";
pub const SUBTOTAL_NET_LABEL: &str = "Zwischensumme Netto";
pub const DISCOUNT_LABEL: &str = "Rabatt";
pub const TOTAL_NET_LABEL: &str = "Gesamtpreis Netto";
pub const VAT_LABEL: &str = "MwSt. (19 %)";
pub const TOTAL_GROSS_LABEL: &str = "Gesamtpreis Brutto";

pub const GALLERY_TITLE: &str = "Empfohlene Perspektiven Außen:";

pub const VALID_UNTIL_LABEL: &str = "Dieses Angebot ist gültig bis: ";
pub const DELIVERY_WAY_LABEL: &str = "Lieferweg: ";
pub const DELIVERY_WAY: &str = "Digital via Email";
pub const DELIVERY_DATE_LABEL: &str = "Voraussichtl. Leistungsdatum: ";

pub const CLOSING: &str = "Mit freundlichen Grüßen";

pub const FOOTNOTE_1_MARKER: &str = "(1):";
pub const FOOTNOTE_1: &str = "Sollten Sie dadurch eine weitere Revision benötigen, die nicht durch uns verschuldet wurde, führen wir diese zum kostenlosen Grundpreis durchgehend. Bei komplexeren Änderungswünschen, welche eine deutlich längere Bearbeitungszeit benötigen, behalten wir uns das Recht vor, 50% der ursprünglichen Lieferzeit zu berechnen. Bei Hunderten von Projekten benötigen unsere Kunden im Schnitt unter 6 aller Fälle eine zweite Revision. 50% der ursprünglichen Lieferzeit dauert eine Revision durchschnittlich 2-3 Arbeitstage.";

pub const FOOTNOTE_2_MARKER: &str = "(2):";
pub const FOOTNOTE_2: &str = "Sofern Sie nach 12 Monaten die Tour immer noch benutzen möchten, können Sie diese gerne verlängern, wobei eine geringe Gebühr für 12 Monate anfällt.";

pub const DISCLAIMER_TITLE: &str = "Haftungsausschluss:";
pub const DISCLAIMER: &str = "Wir sind stets bestrebt, Ihre Visualisierungen so detailgetreu zu erstellen. Jeder dienen dieser Visualisierungen sind Künstlerische Schöpfungen welche subjektiven Haftung. Schäden auf Grund von Abweichungen hiernach.";
