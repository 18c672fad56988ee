//! Built-in business-module tree.

use crate::models::{FolderColor, ModuleNode};

use FolderColor::{Blue, Pink, Yellow};

fn leaf(id: &str, label: &str, color: FolderColor) -> ModuleNode {
    ModuleNode::leaf(id, label, color)
}

fn branch(id: &str, label: &str, color: FolderColor, children: Vec<ModuleNode>) -> ModuleNode {
    ModuleNode::branch(id, label, color, children)
}

/// The module forest shipped with the application.
#[must_use]
pub fn builtin_forest() -> Vec<ModuleNode> {
    vec![
        branch(
            "registro",
            "Registro de Operaciones",
            Yellow,
            vec![
                branch(
                    "registro-compras",
                    "Compras",
                    Yellow,
                    vec![leaf("registro-compras-orden", "Orden de Compra", Yellow)],
                ),
                branch(
                    "registro-bodega",
                    "Bodega",
                    Yellow,
                    vec![leaf(
                        "registro-bodega-mezclas",
                        "Mezclas y Componentes",
                        Yellow,
                    )],
                ),
            ],
        ),
        branch(
            "inf-op",
            "Informes Operacionales",
            Blue,
            vec![
                branch(
                    "inf-op-fact",
                    "Facturación",
                    Blue,
                    vec![leaf("inf-op-fact-cotizaciones", "Cotizaciones", Blue)],
                ),
                branch(
                    "inf-op-compras",
                    "Compras",
                    Blue,
                    vec![
                        leaf("inf-op-compras-dtes", "DTEs", Blue),
                        leaf("inf-op-compras-import", "Importaciones", Blue),
                    ],
                ),
                branch(
                    "inf-op-banco",
                    "Banco",
                    Blue,
                    vec![branch(
                        "inf-op-banco-finanzas",
                        "Finanzas",
                        Blue,
                        vec![
                            leaf("inf-op-banco-finanzas-saldos", "Saldos", Blue),
                            leaf("inf-op-banco-finanzas-venc", "Vencimientos", Blue),
                        ],
                    )],
                ),
                branch(
                    "inf-op-bodega",
                    "Bodega",
                    Blue,
                    vec![
                        leaf("inf-op-bodega-compras", "Compras", Blue),
                        leaf("inf-op-bodega-consumos", "Consumos y Producción", Blue),
                        leaf("inf-op-bodega-siembras", "Siembras", Blue),
                        leaf("inf-op-bodega-stocks", "Stocks", Blue),
                        leaf("inf-op-bodega-estructurales", "Estructurales", Blue),
                    ],
                ),
                leaf("inf-op-lecheria", "Lechería", Blue),
                branch(
                    "inf-op-rem",
                    "Remuneraciones",
                    Blue,
                    vec![leaf("inf-op-rem-inf-anuales", "Informes anuales", Blue)],
                ),
            ],
        ),
        branch(
            "inf-contables",
            "Informes Contables",
            Blue,
            vec![
                leaf("inf-contables-balances", "Balances", Blue),
                leaf("inf-contables-kardex", "Kardex", Blue),
                leaf("inf-contables-tributarios", "Tributarios", Blue),
            ],
        ),
        branch(
            "experimentales",
            "Experimentales y viejos",
            Pink,
            vec![branch(
                "experimentales-rem-2021",
                "Remuneraciones 2021",
                Pink,
                vec![leaf(
                    "experimentales-rem-2021-inf-anuales",
                    "Inf. Anuales",
                    Pink,
                )],
            )],
        ),
        branch(
            "extra-root",
            "Nuevo módulo (ejemplo)",
            Yellow,
            vec![leaf("extra-child", "Submódulo de prueba", Blue)],
        ),
    ]
}
