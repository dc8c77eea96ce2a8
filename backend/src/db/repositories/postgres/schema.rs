//! Diesel schema for the score dataset.

diesel::table! {
    students (id) {
        id -> Int8,
        sbd -> Varchar,
        toan -> Nullable<Float8>,
        ngu_van -> Nullable<Float8>,
        ngoai_ngu -> Nullable<Float8>,
        vat_li -> Nullable<Float8>,
        hoa_hoc -> Nullable<Float8>,
        sinh_hoc -> Nullable<Float8>,
        lich_su -> Nullable<Float8>,
        dia_li -> Nullable<Float8>,
        gdcd -> Nullable<Float8>,
        ma_ngoai_ngu -> Nullable<Varchar>,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}
