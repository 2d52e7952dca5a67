#![allow(dead_code)]

use rusqlite::Connection;
use std::{fs, path::Path};

/// Flat extract covering the interesting shapes in one file: a clean
/// shipped line, a duplicate (order, product) pair, an unshipped line,
/// a negative quantity, and a missing order date.
pub const SALES_CSV: &str = "\
order_id,customer_id,product_id,category,unit_price,quantity,discount,order_date,required_date,shipped_date
1,ALFKI,10,Beverages,10.0,5,0.1,2023-01-02,2023-01-16,2023-01-09
1,ALFKI,10,Beverages,10.0,5,0.1,2023-01-02,2023-01-16,2023-01-09
2,ANATR,20,Produce,4.5,3,0,2023-02-01,2023-02-15,
3,BERGS,30,Seafood,25.0,-2,0,2023-02-03,2023-02-17,2023-02-05
4,BLAUS,40,Condiments,8.0,2,0.05,,2023-03-01,
";

/// Same file with the quantity column removed, which must abort the run.
pub const SALES_CSV_NO_QUANTITY: &str = "\
order_id,customer_id,product_id,category,unit_price,discount,order_date,required_date,shipped_date
1,ALFKI,10,Beverages,10.0,0.1,2023-01-02,2023-01-16,2023-01-09
";

pub fn write_sales_csv(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("sales_extract.csv");
    fs::write(&path, contents).expect("write sales csv");
    path
}

/// Seeds a minimal Northwind database with the same shapes as
/// `SALES_CSV`, minus the rows SQLite cannot represent as a join result
/// (the extract query never yields a row with a null order id).
pub fn seed_northwind(path: &Path) {
    let conn = Connection::open(path).expect("create db");
    conn.execute_batch(
        r#"
        CREATE TABLE Orders (
            OrderID INTEGER PRIMARY KEY,
            CustomerID TEXT,
            OrderDate TEXT,
            RequiredDate TEXT,
            ShippedDate TEXT
        );
        CREATE TABLE "Order Details" (
            OrderID INTEGER,
            ProductID INTEGER,
            UnitPrice REAL,
            Quantity INTEGER,
            Discount REAL
        );
        CREATE TABLE Products (
            ProductID INTEGER PRIMARY KEY,
            ProductName TEXT,
            CategoryID INTEGER
        );
        CREATE TABLE Categories (
            CategoryID INTEGER PRIMARY KEY,
            CategoryName TEXT
        );

        INSERT INTO Categories VALUES (1, 'Beverages'), (2, 'Produce');
        INSERT INTO Products VALUES (10, 'Chai', 1), (20, 'Tofu', 2);
        INSERT INTO Orders VALUES
            (1, 'ALFKI', '2023-01-02 00:00:00', '2023-01-16 00:00:00', '2023-01-09 00:00:00'),
            (2, 'ANATR', '2023-02-01 00:00:00', '2023-02-15 00:00:00', NULL);
        INSERT INTO "Order Details" VALUES
            (1, 10, 10.0, 5, 0.1),
            (1, 10, 10.0, 5, 0.1),
            (1, 20, 4.5, 3, 0),
            (2, 20, 4.5, -3, 0);
        "#,
    )
    .expect("seed northwind");
}

pub fn read_csv_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read csv")
        .lines()
        .map(str::to_string)
        .collect()
}
