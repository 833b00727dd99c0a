//! Демонстрационное наполнение хранилищ при старте приложения.
//!
//! Данные статичны и живут только в памяти вкладки; бэкенда в текущем
//! объёме нет.

use contracts::domain::common::LineItem;
use contracts::domain::inspection::{BatchStatus, InspectionBatch, InspectionOrder};
use contracts::domain::product::SkuItem;
use contracts::domain::purchase_order::{PurchaseOrder, PurchaseStatus, PurchaseType};
use contracts::domain::receiving::{ReceivingOrder, ReceivingStatus};
use contracts::domain::requisition::Requisition;
use contracts::domain::supplier::Supplier;

pub fn sku_catalog() -> Vec<SkuItem> {
    vec![
        SkuItem::new("1", "测试产品8", "THP4662124137", "p8"),
        SkuItem::new("2", "测试产品7", "THP4414531785", "p7"),
        SkuItem::new("3", "打捆绳（复制）", "THP8787054415", "p3"),
        SkuItem::new("4", "打捆绳", "THP1317877406", "p4"),
        SkuItem::new("5", "打捆绳", "THP6245230774", "p5"),
        SkuItem::new("6", "打捆绳", "THP4221601860", "p6"),
        SkuItem::new("7", "捆草网", "THP7017351182", "p1"),
    ]
}

pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier::new("1", "晨光文具股份有限公司", "张经理", "zhang@chenguang.com", 4.8, "办公用品"),
        Supplier::new("2", "联想（北京）有限公司", "李主管", "li@lenovo.com", 4.5, "电子设备"),
        Supplier::new("3", "全友家私有限公司", "王经理", "wang@quanyou.com", 4.2, "办公家具"),
        Supplier::new("4", "京东企业购", "赵经理", "zhao@jd.com", 4.9, "综合电商"),
        Supplier::new("5", "顺丰速运", "孙主管", "sun@sf.com", 4.6, "物流服务"),
    ]
}

/// 25 заявок: первые четыре — именованные, остальные генерируются,
/// чтобы список занимал несколько страниц.
pub fn requisitions() -> Vec<Requisition> {
    let named: [(&str, &str, &str, &str, f64, PurchaseStatus); 4] = [
        ("Q4 办公用品采购", "张三", "行政部", "2023-10-01", 5_200.0, PurchaseStatus::Pending),
        ("服务器扩容需求", "李四", "技术部", "2023-10-02", 120_000.0, PurchaseStatus::Approved),
        ("行政部门午餐福利", "王五", "行政部", "2023-10-03", 800.0, PurchaseStatus::Ordered),
        ("人体工学椅换新", "赵六", "行政部", "2023-10-04", 4_500.0, PurchaseStatus::Cancelled),
    ];

    let requesters = ["张三", "李四", "王五", "赵六", "孙七"];
    let departments = ["行政部", "技术部", "市场部", "仓储部"];
    let statuses = [
        PurchaseStatus::Pending,
        PurchaseStatus::Approved,
        PurchaseStatus::Ordered,
        PurchaseStatus::Cancelled,
    ];

    (1..=25)
        .map(|i| {
            let id = format!("PR-2023{:04}", 1000 + i);
            let mut req = if let Some((title, requester, department, date, total, status)) =
                named.get(i - 1).copied()
            {
                let mut r = Requisition::new(id, title, requester, department, date, status);
                r.items.push(LineItem::with_amounts("采购物料", "THP0000000000", 1, total));
                r
            } else {
                let mut r = Requisition::new(
                    id,
                    format!("部门物料补充采购 {}", i),
                    requesters[i % requesters.len()],
                    departments[i % departments.len()],
                    format!("2023-10-{:02}", (i % 28) + 1),
                    statuses[i % statuses.len()],
                );
                r.items.push(LineItem::with_amounts(
                    "采购物料",
                    "THP0000000000",
                    (i as u32 % 9) + 1,
                    150.0 + i as f64 * 35.0,
                ));
                r
            };
            req.items[0].spec = "通用".to_string();
            req
        })
        .collect()
}

pub fn purchase_orders() -> Vec<PurchaseOrder> {
    let mut first = PurchaseOrder::draft("POC202601067719".to_string(), "2026-01-06 17:19:02".to_string());
    first.order_date = "2026-01-06".to_string();
    first.purchase_type = PurchaseType::Formal;
    first.category = "part".to_string();
    first.company = "测试公司".to_string();
    first.supplier = "晨光文具股份有限公司".to_string();
    first.payment_method = "银行转账".to_string();
    first.prepay_ratio = 30;
    first.delivery_method = "供应商送货".to_string();
    first.pickup_address = "上海市浦东新区测试路 88 号".to_string();
    first.contract_terms = "按样品标准验收".to_string();
    first.status = PurchaseStatus::Ordered;
    first.items = vec![
        line_with_spec("打捆绳", "THP1317877406", "", 10, 15.5, 0),
        line_with_spec("捆草网", "THP7017351182", "", 5, 120.0, 0),
    ];

    let mut second = PurchaseOrder::draft("POC202601131420".to_string(), "2026-01-13 14:20:15".to_string());
    second.order_date = "2026-01-13".to_string();
    second.purchase_type = PurchaseType::Sample;
    second.category = "part".to_string();
    second.company = "测试公司".to_string();
    second.supplier = "联想（北京）有限公司".to_string();
    second.payment_method = "月结".to_string();
    second.delivery_method = "自提".to_string();
    second.status = PurchaseStatus::Pending;
    second.items = vec![line_with_spec("测试产品7", "THP4414531785", "B-202", 15, 120.0, 0)];

    vec![first, second]
}

pub fn inspections() -> Vec<InspectionOrder> {
    vec![
        InspectionOrder {
            id: "INS464288540000258".to_string(),
            purchase_order_id: "POC202601067719".to_string(),
            supplier: "晨光文具股份有限公司".to_string(),
            address: "上海市浦东新区测试路 88 号".to_string(),
            delivery_method: "供应商送货".to_string(),
            create_time: "2026-01-06 17:18:40".to_string(),
            batches: vec![
                batch("202601061718", BatchStatus::Draft, vec![
                    line_with_spec("测试商品 3", "SKU-PR20231215001-3", "", 12, 89.0, 1),
                ]),
                batch("202601061719", BatchStatus::Approved, vec![
                    line_with_spec("测试商品 3", "SKU-PR20231215001-3", "", 30, 89.0, 3),
                    line_with_spec("配套耗材 A", "SKU-PR20231215001-5", "通用", 100, 5.5, 0),
                ]),
                batch("202601091509", BatchStatus::Draft, vec![
                    line_with_spec("测试商品 3", "SKU-PR20231215001-3", "", 9, 89.0, 0),
                ]),
            ],
        },
        InspectionOrder {
            id: "INS462835016531970".to_string(),
            purchase_order_id: "POC202601131420".to_string(),
            supplier: "联想（北京）有限公司".to_string(),
            address: "北京市海淀区创业路 1 号".to_string(),
            delivery_method: "自提".to_string(),
            create_time: "2026-01-13 14:19:50".to_string(),
            batches: vec![batch("202601061805", BatchStatus::Approved, vec![
                line_with_spec("测试商品 4", "SKU-PR20231215001-4", "B-202", 15, 120.0, 1),
            ])],
        },
        InspectionOrder {
            id: "INS465112070000031".to_string(),
            purchase_order_id: "POC202601067719".to_string(),
            supplier: "晨光文具股份有限公司".to_string(),
            address: "上海市浦东新区测试路 88 号".to_string(),
            delivery_method: "供应商送货".to_string(),
            create_time: "2026-01-09 15:08:12".to_string(),
            batches: vec![batch("202601061912", BatchStatus::Approved, vec![
                line_with_spec("修正带 (10装)", "SKU-PR20231215001-9", "蓝色", 50, 45.0, 0),
            ])],
        },
    ]
}

pub fn receiving_orders() -> Vec<ReceivingOrder> {
    vec![
        ReceivingOrder {
            id: "REC202601140001".to_string(),
            inspection_id: "INS464288540000258".to_string(),
            supplier: "测试供应商".to_string(),
            create_time: "2026-01-14 10:30:00".to_string(),
            receiver: "管理员".to_string(),
            status: ReceivingStatus::Pending,
        },
        ReceivingOrder {
            id: "REC202601130005".to_string(),
            inspection_id: "INS462835016531970".to_string(),
            supplier: "测试供应商".to_string(),
            create_time: "2026-01-13 14:20:15".to_string(),
            receiver: "采购员A".to_string(),
            status: ReceivingStatus::Received,
        },
    ]
}

fn batch(id: &str, status: BatchStatus, products: Vec<LineItem>) -> InspectionBatch {
    let mut b = InspectionBatch::new(id);
    b.status = status;
    b.products = products;
    b
}

fn line_with_spec(
    name: &str,
    sku: &str,
    spec: &str,
    quantity: u32,
    unit_price: f64,
    photo_count: u32,
) -> LineItem {
    let mut item = LineItem::with_amounts(name, sku, quantity, unit_price);
    item.spec = spec.to_string();
    item.photo_count = photo_count;
    item
}
