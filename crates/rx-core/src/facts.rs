//! The literal interaction table and drug vocabulary the store is built from.
//!
//! Each row is `(drug_a, drug_b, severity, risk, recommendation)`. Pairs are
//! unordered; some appear twice in opposite orders with different advice and
//! both rows are kept.

/// Raw interaction rows in registration order.
#[rustfmt::skip]
pub(crate) const SEED_FACTS: &[(&str, &str, &str, &str, &str)] = &[
    ("warfarin", "aspirin", "high", "Increased risk of bleeding", "Monitor INR and avoid concurrent use unless necessary."),
    ("warfarin", "ibuprofen", "high", "Gastrointestinal bleeding risk", "Use acetaminophen instead."),
    ("warfarin", "naproxen", "high", "GI bleeding", "Avoid combination"),
    ("warfarin", "clopidogrel", "high", "Severe bleeding", "Use with caution; monitor closely"),
    ("warfarin", "amiodarone", "high", "Increased INR", "Reduce warfarin dose and monitor INR"),
    ("warfarin", "fluconazole", "high", "Increased bleeding due to CYP2C9 inhibition", "Use alternative antifungal"),
    ("warfarin", "metronidazole", "high", "Severe increase in INR", "Avoid or monitor closely"),
    ("warfarin", "erythromycin", "high", "Increased warfarin effect", "Monitor INR closely"),
    ("warfarin", "cimetidine", "moderate", "Increased warfarin plasma levels", "Consider alternative H2 blocker"),
    ("warfarin", "allopurinol", "moderate", "Increased anticoagulant effect", "Monitor INR"),
    ("aspirin", "ibuprofen", "moderate", "Reduced cardioprotective effect of aspirin", "Take aspirin 30 minutes before ibuprofen"),
    ("aspirin", "clopidogrel", "high", "Additive antiplatelet effect", "Use only with close monitoring"),
    ("aspirin", "prednisolone", "high", "GI ulcer risk", "Use PPI as gastroprotection"),
    ("aspirin", "heparin", "high", "Increased bleeding", "Avoid unless medically necessary"),
    ("ibuprofen", "lithium", "high", "Increased lithium levels", "Monitor lithium serum concentration"),
    ("ibuprofen", "methotrexate", "high", "Reduced methotrexate clearance", "Avoid concurrent use"),
    ("ibuprofen", "ramipril", "moderate", "Reduced antihypertensive effect", "Monitor blood pressure and renal function"),
    ("ibuprofen", "digoxin", "moderate", "Increased digoxin concentration", "Monitor serum digoxin levels"),
    ("ibuprofen", "furosemide", "moderate", "Reduced diuretic efficacy", "Monitor fluid retention"),
    ("erythromycin", "theophylline", "high", "Increased theophylline levels", "Monitor for toxicity"),
    ("erythromycin", "simvastatin", "high", "Rhabdomyolysis risk", "Avoid combination"),
    ("clarithromycin", "warfarin", "high", "Increased bleeding risk", "Monitor INR closely"),
    ("rifampin", "oral_contraceptives", "high", "Reduced contraceptive effectiveness", "Use backup method"),
    ("trimethoprim", "spironolactone", "high", "Hyperkalemia", "Monitor potassium levels"),
    ("trimethoprim", "warfarin", "high", "Increased INR", "Adjust warfarin dose accordingly"),
    ("amoxicillin", "allopurinol", "moderate", "Rash risk", "Monitor skin reaction"),
    ("metronidazole", "alcohol", "high", "Disulfiram-like reaction", "Avoid alcohol"),
    ("beta_blockers", "verapamil", "high", "Bradycardia and heart block", "Avoid combination"),
    ("beta_blockers", "insulin", "moderate", "Masked hypoglycemia", "Educate patient on symptoms"),
    ("amlodipine", "simvastatin", "moderate", "Increased simvastatin levels", "Limit simvastatin to 20 mg"),
    ("nitrates", "sildenafil", "high", "Severe hypotension", "Contraindicated"),
    ("enalapril", "potassium_supplements", "high", "Hyperkalemia", "Avoid or monitor potassium"),
    ("spironolactone", "lisinopril", "high", "Additive potassium retention", "Monitor serum potassium"),
    ("furosemide", "digoxin", "high", "Hypokalemia increases digoxin toxicity", "Monitor K+ and digoxin"),
    ("clonidine", "beta_blockers", "high", "Rebound hypertension on withdrawal", "Taper beta-blockers gradually"),
    ("fluoxetine", "tramadol", "high", "Serotonin syndrome", "Use with caution"),
    ("fluoxetine", "warfarin", "high", "Increased bleeding", "Monitor INR"),
    ("fluoxetine", "amitriptyline", "moderate", "Increased TCA levels", "Monitor side effects"),
    ("sertraline", "NSAIDs", "moderate", "Increased bleeding", "Monitor for signs of GI bleeding"),
    ("sertraline", "linezolid", "high", "Serotonin syndrome", "Contraindicated"),
    ("haloperidol", "carbamazepine", "moderate", "Reduced haloperidol effect", "Increase dose if needed"),
    ("haloperidol", "lithium", "high", "Neurotoxicity risk", "Monitor neurologic function"),
    ("metformin", "contrast_dye", "high", "Lactic acidosis risk", "Hold metformin before contrast"),
    ("insulin", "beta_blockers", "moderate", "Masking of hypoglycemia", "Caution in diabetic patients"),
    ("sitagliptin", "digoxin", "moderate", "Increased digoxin levels", "Monitor digoxin"),
    ("fluconazole", "warfarin", "high", "Potentiation of warfarin effect", "Monitor INR"),
    ("ketoconazole", "statins", "high", "Rhabdomyolysis risk", "Avoid concurrent use"),
    ("itraconazole", "digoxin", "moderate", "Increased digoxin concentration", "Monitor levels"),
    ("phenytoin", "warfarin", "high", "Fluctuating INR levels", "Frequent monitoring"),
    ("phenytoin", "doxycycline", "moderate", "Reduced doxycycline levels", "Increase dose"),
    ("valproate", "lamotrigine", "high", "Severe skin rash", "Start lamotrigine at lower dose"),
    ("carbamazepine", "oral_contraceptives", "high", "Reduced contraceptive effect", "Use backup method"),
    ("ritonavir", "simvastatin", "high", "Rhabdomyolysis risk", "Use pravastatin instead"),
    ("ritonavir", "omeprazole", "moderate", "Reduced ritonavir levels", "Monitor viral load"),
    ("efavirenz", "methadone", "moderate", "Withdrawal symptoms", "Increase methadone dose"),
    ("theophylline", "ciprofloxacin", "high", "Theophylline toxicity", "Monitor serum levels"),
    ("digoxin", "verapamil", "high", "Bradycardia risk", "Monitor heart rate and ECG"),
    ("levothyroxine", "calcium_carbonate", "moderate", "Reduced thyroid absorption", "Separate dosing by 4 hours"),
    ("levothyroxine", "iron_supplements", "moderate", "Reduced efficacy", "Separate by several hours"),
    ("simvastatin", "grapefruit_juice", "high", "Increased statin levels", "Avoid grapefruit"),
    ("cyclosporine", "diltiazem", "high", "Increased cyclosporine concentration", "Monitor levels"),
    ("cyclosporine", "potassium_sparing_diuretics", "high", "Hyperkalemia", "Monitor potassium closely"),
    ("allopurinol", "azathioprine", "high", "Bone marrow suppression", "Reduce azathioprine dose"),
    ("chlorpromazine", "metoclopramide", "high", "Extrapyramidal symptoms", "Avoid concurrent use"),
    ("clozapine", "ciprofloxacin", "high", "Increased clozapine levels", "Monitor WBC and clozapine level"),
    ("clopidogrel", "omeprazole", "high", "Reduced antiplatelet effect", "Use pantoprazole instead"),
    ("fexofenadine", "fruit_juice", "moderate", "Reduced absorption", "Avoid juice 4 hrs before/after"),
    ("paracetamol", "warfarin", "moderate", "Increased INR with prolonged use", "Monitor INR"),
    ("paracetamol", "alcohol", "high", "Liver toxicity", "Avoid heavy alcohol use"),
    ("bisoprolol", "verapamil", "high", "Bradycardia", "Avoid combination"),
    ("loperamide", "quinidine", "high", "Cardiac arrhythmia", "Avoid combination"),
    ("naproxen", "lithium", "high", "Increased lithium levels", "Monitor lithium level"),
    ("pantoprazole", "clopidogrel", "moderate", "Possible reduced effect of clopidogrel", "Monitor if used together"),
    ("loratadine", "erythromycin", "moderate", "QT prolongation risk", "Monitor ECG in high doses"),
    ("duloxetine", "tramadol", "high", "Seizure and serotonin syndrome", "Avoid combination"),
    ("bupropion", "sertraline", "moderate", "Lowered seizure threshold", "Avoid high doses"),
    ("ketorolac", "enoxaparin", "high", "Major bleeding risk", "Avoid concurrent use"),
];

/// Closed vocabulary offered to users when building a selection.
pub const KNOWN_DRUGS: &[&str] = &[
    "allopurinol", "amiodarone", "amlodipine", "amoxicillin", "aspirin", "azathioprine",
    "beta_blockers", "bisoprolol", "bupropion", "calcium_carbonate", "carbamazepine",
    "chlorpromazine", "ciprofloxacin", "clarithromycin", "clonidine", "clopidogrel",
    "clozapine", "contrast_dye", "cyclosporine", "digoxin", "diltiazem", "doxycycline",
    "duloxetine", "efavirenz", "enalapril", "enoxaparin", "erythromycin", "fluconazole",
    "fluoxetine", "fruit_juice", "furosemide", "grapefruit_juice", "haloperidol", "heparin",
    "ibuprofen", "insulin", "iron_supplements", "itraconazole", "ketoconazole", "ketorolac",
    "lamotrigine", "levothyroxine", "linezolid", "lisinopril", "lithium", "loperamide",
    "loratadine", "metformin", "methadone", "metoclopramide", "metronidazole", "methotrexate",
    "naproxen", "nitrates", "NSAIDs", "omeprazole", "oral_contraceptives", "pantoprazole",
    "paracetamol", "phenytoin", "potassium_sparing_diuretics", "potassium_supplements",
    "prednisolone", "quinidine", "ramipril", "rifampin", "ritonavir", "sertraline",
    "simvastatin", "sitagliptin", "spironolactone", "statins", "sildenafil", "theophylline",
    "tramadol", "trimethoprim", "valproate", "verapamil", "warfarin",
];
